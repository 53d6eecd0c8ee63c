use crate::blocks::issue::BuildIssue;
use crate::blocks::model::{Block, Bookmark, Embed, ExternalFile, ExternalUrl};
use crate::foundation::core::is_http_url;
use crate::text::run::RichText;

/// Externally hosted file kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    /// Image.
    Image,
    /// Video.
    Video,
    /// Audio.
    Audio,
    /// PDF document.
    Pdf,
    /// Any other file.
    File,
}

fn checked_url(url: &str) -> Result<String, BuildIssue> {
    if is_http_url(url) {
        Ok(url.trim().to_owned())
    } else {
        Err(BuildIssue::InvalidUrl {
            url: url.to_owned(),
        })
    }
}

fn caption_runs(caption: Option<&str>) -> Vec<RichText> {
    match caption {
        Some(c) if !c.trim().is_empty() => vec![RichText::plain(c)],
        _ => Vec::new(),
    }
}

fn degrade(result: Result<Block, BuildIssue>) -> Block {
    result.unwrap_or_else(|issue| {
        tracing::warn!(%issue, "media block degraded to placeholder");
        issue.placeholder()
    })
}

/// External file block, or the issue explaining why the URL was refused.
pub fn try_media(kind: MediaKind, url: &str, caption: Option<&str>) -> Result<Block, BuildIssue> {
    let file = ExternalFile {
        external: ExternalUrl {
            url: checked_url(url)?,
        },
        caption: caption_runs(caption),
    };
    Ok(match kind {
        MediaKind::Image => Block::Image { image: file },
        MediaKind::Video => Block::Video { video: file },
        MediaKind::Audio => Block::Audio { audio: file },
        MediaKind::Pdf => Block::Pdf { pdf: file },
        MediaKind::File => Block::File { file },
    })
}

/// Embed block, or the issue explaining why the URL was refused.
pub fn try_embed(url: &str) -> Result<Block, BuildIssue> {
    Ok(Block::Embed {
        embed: Embed {
            url: checked_url(url)?,
        },
    })
}

/// Bookmark block, or the issue explaining why the URL was refused.
pub fn try_bookmark(url: &str, caption: Option<&str>) -> Result<Block, BuildIssue> {
    Ok(Block::Bookmark {
        bookmark: Bookmark {
            url: checked_url(url)?,
            caption: caption_runs(caption),
        },
    })
}

/// Image; an invalid URL degrades to a visible error paragraph.
pub fn image(url: &str, caption: Option<&str>) -> Block {
    degrade(try_media(MediaKind::Image, url, caption))
}

/// Video; an invalid URL degrades to a visible error paragraph.
pub fn video(url: &str, caption: Option<&str>) -> Block {
    degrade(try_media(MediaKind::Video, url, caption))
}

/// Audio; an invalid URL degrades to a visible error paragraph.
pub fn audio(url: &str, caption: Option<&str>) -> Block {
    degrade(try_media(MediaKind::Audio, url, caption))
}

/// PDF; an invalid URL degrades to a visible error paragraph.
pub fn pdf(url: &str, caption: Option<&str>) -> Block {
    degrade(try_media(MediaKind::Pdf, url, caption))
}

/// File; an invalid URL degrades to a visible error paragraph.
pub fn file(url: &str, caption: Option<&str>) -> Block {
    degrade(try_media(MediaKind::File, url, caption))
}

/// Embed; an invalid URL degrades to a visible error paragraph.
pub fn embed(url: &str) -> Block {
    degrade(try_embed(url))
}

/// Bookmark; an invalid URL degrades to a visible error paragraph.
pub fn bookmark(url: &str, caption: Option<&str>) -> Block {
    degrade(try_bookmark(url, caption))
}

#[cfg(test)]
#[path = "../../tests/unit/blocks/media.rs"]
mod tests;
