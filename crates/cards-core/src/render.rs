use crate::locale::Localizer;
use crate::traits::AvatarArtist;
use crate::widget::ContributorsWidget;

/// One rendered contributor card
#[derive(Debug, Clone)]
pub struct CardView {
    /// Generated avatar rows, keyed by the login
    pub avatar: Vec<String>,
    pub login: String,
    pub contributions: u64,
    /// Link wrapped around the avatar
    pub profile_link: String,
}

/// The widget's full visual output, ready for painting
#[derive(Debug, Clone)]
pub struct Surface {
    pub title: String,
    /// Header link to the repository page (the collapsible summary link)
    pub repo_link: String,
    /// Whether the loading indicator line is shown. Independent of the card
    /// list: both can be visible at once.
    pub loading: bool,
    pub cards: Vec<CardView>,
    /// Localized card labels: (username, contributions, loading)
    pub labels: Labels,
}

#[derive(Debug, Clone)]
pub struct Labels {
    pub username: String,
    pub contributions: String,
    pub loading: String,
}

/// Produce the visual output for the widget's current state.
///
/// Pure with respect to the widget: same state, same artist, same localizer
/// always yields the same surface.
pub fn render(
    widget: &ContributorsWidget,
    artist: &dyn AvatarArtist,
    localizer: &Localizer,
) -> Surface {
    let cards = widget
        .items()
        .iter()
        .map(|item| CardView {
            avatar: artist.art_for(&item.login),
            login: item.login.clone(),
            contributions: item.contributions,
            profile_link: item.profile_link(),
        })
        .collect();

    Surface {
        title: widget.title().to_string(),
        repo_link: format!(
            "https://github.com/{}/{}",
            widget.organization(),
            widget.repo()
        ),
        loading: widget.loading(),
        cards,
        labels: Labels {
            username: localizer.term("username").to_string(),
            contributions: localizer.term("contributions").to_string(),
            loading: localizer.term("loading").to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Contributor, FetchRequest};
    use crate::traits::FetchDispatcher;
    use std::cell::RefCell;

    struct NullDispatcher;

    impl FetchDispatcher for NullDispatcher {
        fn dispatch(&mut self, _request: FetchRequest) {}
    }

    /// Artist that records every seed it is asked to draw
    #[derive(Default)]
    struct RecordingArtist {
        seeds: RefCell<Vec<String>>,
    }

    impl AvatarArtist for RecordingArtist {
        fn art_for(&self, seed: &str) -> Vec<String> {
            self.seeds.borrow_mut().push(seed.to_string());
            vec![format!("[{}]", seed)]
        }
    }

    fn widget_with_items(items: Vec<Contributor>) -> ContributorsWidget {
        let mut widget = ContributorsWidget::new();
        widget.submit("octocat", "Hello-World", &mut NullDispatcher);
        widget.apply_response(items);
        widget
    }

    fn contributor(login: &str, contributions: u64) -> Contributor {
        Contributor {
            login: login.to_string(),
            html_url: format!("https://github.com/{}", login),
            contributions,
        }
    }

    #[test]
    fn renders_one_card_per_contributor() {
        let widget = widget_with_items(vec![contributor("alice", 120), contributor("bob", 7)]);
        let surface = render(&widget, &RecordingArtist::default(), &Localizer::english());

        assert_eq!(surface.cards.len(), 2);
        assert_eq!(surface.cards[0].login, "alice");
        assert_eq!(surface.cards[0].contributions, 120);
        assert_eq!(surface.cards[1].login, "bob");
        assert_eq!(surface.cards[1].contributions, 7);
        assert!(!surface.loading);
    }

    #[test]
    fn avatar_seed_is_the_login_exactly() {
        let widget = widget_with_items(vec![
            contributor("alice", 1),
            contributor("UPPER-case_93", 2),
            contributor("bob", 3),
        ]);
        let artist = RecordingArtist::default();
        render(&widget, &artist, &Localizer::english());

        assert_eq!(
            *artist.seeds.borrow(),
            vec!["alice", "UPPER-case_93", "bob"]
        );
    }

    #[test]
    fn cards_link_to_the_repositories_tab() {
        let widget = widget_with_items(vec![contributor("alice", 1)]);
        let surface = render(&widget, &RecordingArtist::default(), &Localizer::english());

        assert_eq!(
            surface.cards[0].profile_link,
            "https://github.com/alice?tab=repositories"
        );
    }

    #[test]
    fn repo_link_reflects_the_submitted_pair() {
        let widget = widget_with_items(vec![contributor("alice", 1)]);
        let surface = render(&widget, &RecordingArtist::default(), &Localizer::english());

        assert_eq!(surface.repo_link, "https://github.com/octocat/Hello-World");
    }

    #[test]
    fn loading_line_shows_alongside_stale_cards() {
        let mut widget = widget_with_items(vec![contributor("alice", 1)]);
        widget.submit("octocat", "missing", &mut NullDispatcher);
        widget.apply_response(Vec::new());

        let surface = render(&widget, &RecordingArtist::default(), &Localizer::english());
        assert!(surface.loading);
        assert_eq!(surface.cards.len(), 1);
    }
}
