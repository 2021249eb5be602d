use crate::catalog::PatternId;
use crate::commands::{CmdMessage, CmdResult, Context};
use crate::error::Result;

pub struct Playlist {
    tracks: Vec<String>,
}

impl Playlist {
    pub fn new<I, S>(tracks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tracks: tracks.into_iter().map(Into::into).collect(),
        }
    }

    pub fn iter(&self) -> Tracks<'_> {
        Tracks {
            playlist: self,
            position: 0,
        }
    }
}

/// Cursor over a [`Playlist`], yielding 1-based track numbers.
pub struct Tracks<'a> {
    playlist: &'a Playlist,
    position: usize,
}

impl<'a> Iterator for Tracks<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let track = self.playlist.tracks.get(self.position)?;
        self.position += 1;
        Some((self.position, track.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.playlist.tracks.len() - self.position;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Tracks<'_> {}

impl<'a> IntoIterator for &'a Playlist {
    type Item = (usize, &'a str);
    type IntoIter = Tracks<'a>;

    fn into_iter(self) -> Tracks<'a> {
        self.iter()
    }
}

pub fn run(_ctx: &Context<'_>) -> Result<CmdResult> {
    let mut result = CmdResult::for_pattern(PatternId::Iterator);
    let playlist = Playlist::new(["Intro", "Verse", "Outro"]);

    for (number, title) in &playlist {
        result.add_message(CmdMessage::info(format!("{}. {}", number, title)));
    }
    let titles: Vec<&str> = playlist.iter().map(|(_, t)| t).collect();
    result.exhibit("tracks", &titles)?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yields_numbered_tracks_in_order() {
        let playlist = Playlist::new(["a", "b"]);
        let items: Vec<_> = playlist.iter().collect();
        assert_eq!(items, vec![(1, "a"), (2, "b")]);
    }

    #[test]
    fn reports_exact_length() {
        let playlist = Playlist::new(["a", "b", "c"]);
        let mut tracks = playlist.iter();
        tracks.next();
        assert_eq!(tracks.len(), 2);
    }

    #[test]
    fn empty_playlist_yields_nothing() {
        let playlist = Playlist::new(Vec::<String>::new());
        assert_eq!(playlist.iter().count(), 0);
    }
}
