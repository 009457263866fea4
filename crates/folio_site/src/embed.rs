//! Third-party video embeds

use url::Url;

use crate::content::ContentItem;
use crate::error::Result;

const VIMEO_PLAYER: &str = "https://player.vimeo.com/video/";

/// Player chrome switched off; playback stays manual
const VIMEO_PARAMS: [(&str, &str); 5] = [
    ("title", "0"),
    ("byline", "0"),
    ("portrait", "0"),
    ("badge", "0"),
    ("autopause", "0"),
];

/// Feature policy granted to the player frame
pub const EMBED_ALLOW: &str = "autoplay; fullscreen; picture-in-picture";

/// An embeddable player for one item
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VideoEmbed {
    pub title: &'static str,
    pub src: Url,
    pub allow: &'static str,
    pub allow_fullscreen: bool,
}

/// Player URL for a Vimeo video id
pub fn vimeo_url(video_id: &str) -> Result<Url> {
    let mut url = Url::parse(VIMEO_PLAYER)?.join(video_id)?;
    url.query_pairs_mut().extend_pairs(VIMEO_PARAMS);
    Ok(url)
}

/// The embed for `item`, if it has a video
pub fn embed_for(item: &ContentItem) -> Result<Option<VideoEmbed>> {
    let Some(video_id) = item.video else {
        return Ok(None);
    };
    Ok(Some(VideoEmbed {
        title: item.title,
        src: vimeo_url(video_id)?,
        allow: EMBED_ALLOW,
        allow_fullscreen: true,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{CINEMATOGRAPHY, FEATURED};

    #[test]
    fn test_vimeo_url() {
        assert_eq!(
            vimeo_url("1127509433").unwrap().as_str(),
            "https://player.vimeo.com/video/1127509433?title=0&byline=0&portrait=0&badge=0&autopause=0"
        );
    }

    #[test]
    fn test_every_film_embeds() {
        for item in &CINEMATOGRAPHY {
            let embed = embed_for(item).unwrap().unwrap();
            assert_eq!(embed.allow, "autoplay; fullscreen; picture-in-picture");
            assert!(embed.src.path().ends_with(item.video.unwrap()));
            assert!(!embed.src.query().unwrap_or("").contains("autoplay"));
        }
    }

    #[test]
    fn test_items_without_video() {
        assert_eq!(embed_for(&FEATURED[0]).unwrap(), None);
    }
}
