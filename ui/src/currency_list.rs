// ui/src/currency_list.rs
//! Local state of the currency list screen, independent of rendering.

use std::future::Future;
use std::iter::Peekable;
use std::str::Chars;
use std::sync::Arc;

use api::currency_record::CurrencyRecord;
use dioxus::prelude::*;

/// Search terms of this many characters or fewer clear the filter.
pub const MIN_SEARCH_CHARS: usize = 2;

/// One member of a [`CharClass`].
#[derive(Debug, Clone, Copy, PartialEq)]
enum ClassItem {
    Char(char),
    Range(char, char),
    Word,
    NotWord,
    Digit,
    NotDigit,
    Space,
    NotSpace,
}

impl ClassItem {
    fn matches(self, c: char) -> bool {
        match self {
            ClassItem::Char(member) => member == c,
            ClassItem::Range(lo, hi) => lo <= c && c <= hi,
            ClassItem::Word => is_word_char(c),
            ClassItem::NotWord => !is_word_char(c),
            ClassItem::Digit => c.is_ascii_digit(),
            ClassItem::NotDigit => !c.is_ascii_digit(),
            ClassItem::Space => c.is_whitespace(),
            ClassItem::NotSpace => !c.is_whitespace(),
        }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

type ClassChars<'a> = Peekable<Chars<'a>>;

/// Reads one member, resolving `\` escapes. A trailing lone `\` is a literal.
fn next_item(chars: &mut ClassChars<'_>) -> Option<ClassItem> {
    let c = chars.next()?;
    if c != '\\' {
        return Some(ClassItem::Char(c));
    }
    let item = match chars.next() {
        Some('w') => ClassItem::Word,
        Some('W') => ClassItem::NotWord,
        Some('d') => ClassItem::Digit,
        Some('D') => ClassItem::NotDigit,
        Some('s') => ClassItem::Space,
        Some('S') => ClassItem::NotSpace,
        Some('t') => ClassItem::Char('\t'),
        Some('n') => ClassItem::Char('\n'),
        Some('r') => ClassItem::Char('\r'),
        Some(other) => ClassItem::Char(other),
        None => ClassItem::Char('\\'),
    };
    Some(item)
}

/// A set of characters built from search text, bracket-expression style.
///
/// A leading `^` negates the class. `\w`, `\d`, `\s` and their upper-case
/// complements are shorthand sets, and any other escaped character is a
/// literal. `a-z` spans are inclusive ranges; a `-` at either end, next to
/// a shorthand set, or inside a reversed span is a literal. `]` is always a
/// literal, so every input yields a valid class.
#[derive(Debug, Clone, PartialEq)]
pub struct CharClass {
    negated: bool,
    items: Vec<ClassItem>,
}

impl CharClass {
    pub fn parse(text: &str) -> Self {
        let mut chars = text.chars().peekable();
        let negated = chars.next_if_eq(&'^').is_some();
        let mut items = Vec::new();

        while let Some(item) = next_item(&mut chars) {
            if let ClassItem::Char(lo) = item {
                if chars.peek() == Some(&'-') {
                    let mut ahead = chars.clone();
                    ahead.next();
                    if let Some(ClassItem::Char(hi)) = next_item(&mut ahead) {
                        if lo <= hi {
                            items.push(ClassItem::Range(lo, hi));
                            chars = ahead;
                            continue;
                        }
                    }
                }
            }
            items.push(item);
        }

        Self { negated, items }
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, c: char) -> bool {
        let member = std::iter::once(c)
            .chain(c.to_lowercase())
            .chain(c.to_uppercase())
            .any(|variant| self.items.iter().any(|item| item.matches(variant)));
        member != self.negated
    }

    /// `true` if `name` starts with a member of the class.
    pub fn matches_start(&self, name: &str) -> bool {
        name.chars().next().is_some_and(|c| self.contains(c))
    }
}

/// The currency list screen's own view of the data.
///
/// `full` mirrors the store; `filtered` is what the list renders. Both are
/// immutable snapshots, so narrowing never touches a previous one.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyListState {
    full: Arc<[CurrencyRecord]>,
    filtered: Arc<[CurrencyRecord]>,
    refreshing: bool,
    revision: u64,
}

impl Default for CurrencyListState {
    fn default() -> Self {
        let empty: Arc<[CurrencyRecord]> = Arc::from(Vec::new());
        Self {
            full: empty.clone(),
            filtered: empty,
            refreshing: false,
            revision: 0,
        }
    }
}

impl CurrencyListState {
    pub fn full(&self) -> &Arc<[CurrencyRecord]> {
        &self.full
    }

    pub fn filtered(&self) -> &Arc<[CurrencyRecord]> {
        &self.filtered
    }

    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Mirrors a new store list. Any active search is discarded.
    pub fn receive(&mut self, revision: u64, records: Arc<[CurrencyRecord]>) {
        self.revision = revision;
        self.full = records.clone();
        self.filtered = records;
    }

    /// Applies the search box text.
    ///
    /// Longer than [`MIN_SEARCH_CHARS`]: keeps the records of the current
    /// filtered snapshot whose name starts with a character of the class.
    /// Otherwise the filtered snapshot is reset to the full one.
    pub fn search(&mut self, text: &str) {
        if text.chars().count() > MIN_SEARCH_CHARS {
            let class = CharClass::parse(text);
            self.filtered = self
                .filtered
                .iter()
                .filter(|record| class.matches_start(&record.name))
                .cloned()
                .collect();
        } else {
            self.filtered = self.full.clone();
        }
    }

    /// Enters the refreshing state. Returns `false` if a refresh is already running.
    pub fn begin_refresh(&mut self) -> bool {
        if self.refreshing {
            return false;
        }
        self.refreshing = true;
        true
    }

    /// Leaves the refreshing state once the fetch settles, whatever its outcome.
    pub fn finish_refresh(&mut self) {
        self.refreshing = false;
    }

    /// Decides what the screen shows for the given store list.
    ///
    /// The header timestamp comes from the store list, not the local copy.
    pub fn view(&self, store_list: &[CurrencyRecord]) -> ScreenView {
        match store_list.first() {
            None => ScreenView::Loading,
            Some(first) => ScreenView::List {
                last_updated: first.last_updated.clone(),
                rows: self.filtered.clone(),
                refreshing: self.refreshing,
            },
        }
    }
}

/// Mutable access to wherever a [`CurrencyListState`] is kept.
pub trait ListStateHandle {
    fn update<R>(&mut self, f: impl FnOnce(&mut CurrencyListState) -> R) -> R;
}

impl ListStateHandle for Signal<CurrencyListState> {
    fn update<R>(&mut self, f: impl FnOnce(&mut CurrencyListState) -> R) -> R {
        self.with_mut(f)
    }
}

/// Enters the refreshing state and returns the task that runs `fetch`.
///
/// Returns `None` while another refresh is in flight. The task clears the
/// flag once `fetch` settles, on success and on failure, and hands back the
/// fetch result.
pub fn start_refresh<H, E, F>(
    mut list: H,
    fetch: F,
) -> Option<impl Future<Output = Result<(), E>>>
where
    H: ListStateHandle,
    F: Future<Output = Result<(), E>>,
{
    if !list.update(|l| l.begin_refresh()) {
        return None;
    }
    Some(async move {
        let result = fetch.await;
        list.update(|l| l.finish_refresh());
        result
    })
}

/// What the currency list screen renders.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenView {
    /// Only a loading indicator.
    Loading,
    /// Header, search box and rows.
    List {
        last_updated: String,
        rows: Arc<[CurrencyRecord]>,
        refreshing: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use tokio::sync::oneshot;

    #[derive(Clone, Default)]
    struct SharedList(Rc<RefCell<CurrencyListState>>);

    impl ListStateHandle for SharedList {
        fn update<R>(&mut self, f: impl FnOnce(&mut CurrencyListState) -> R) -> R {
            f(&mut self.0.borrow_mut())
        }
    }

    impl SharedList {
        fn is_refreshing(&self) -> bool {
            self.0.borrow().is_refreshing()
        }
    }

    fn scenario() -> Arc<[CurrencyRecord]> {
        Arc::from(vec![
            CurrencyRecord::new("btc", "Bitcoin", "BTC", "2023-01-01"),
            CurrencyRecord::new("eth", "Ethereum", "ETH", "2023-01-01"),
        ])
    }

    fn loaded() -> CurrencyListState {
        let mut state = CurrencyListState::default();
        state.receive(1, scenario());
        state
    }

    fn ids(records: &[CurrencyRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_scenario_search_and_clear() {
        let mut state = loaded();
        let store = scenario();

        match state.view(&store) {
            ScreenView::List {
                last_updated, rows, ..
            } => {
                assert_eq!(last_updated, "2023-01-01");
                assert_eq!(ids(&rows), vec!["btc", "eth"]);
            }
            ScreenView::Loading => panic!("expected a list"),
        }

        state.search("Bit");
        assert_eq!(ids(state.filtered()), vec!["btc"]);

        state.search("");
        assert_eq!(ids(state.filtered()), vec!["btc", "eth"]);
    }

    #[test]
    fn test_short_search_resets_to_full() {
        let mut state = loaded();
        state.search("Bit");
        for text in ["", "E", "Et", "ü€"] {
            state.search(text);
            assert_eq!(state.filtered(), state.full());
        }
    }

    #[test]
    fn test_long_search_keeps_only_matching_subset() {
        let mut state = loaded();
        state.search("xyz");
        assert!(state.filtered().is_empty());

        let mut state = loaded();
        state.search("eee");
        assert_eq!(ids(state.filtered()), vec!["eth"]);
        for record in state.filtered().iter() {
            assert!(state.full().iter().any(|r| r.id == record.id));
        }
    }

    #[test]
    fn test_search_narrows_the_previous_result() {
        let mut state = loaded();
        state.search("bie");
        assert_eq!(ids(state.filtered()), vec!["btc", "eth"]);
        state.search("bit");
        assert_eq!(ids(state.filtered()), vec!["btc"]);
        // widening the class does not bring back records removed earlier
        state.search("bite");
        assert_eq!(ids(state.filtered()), vec!["btc"]);
    }

    #[test]
    fn test_search_does_not_mutate_previous_snapshot() {
        let mut state = loaded();
        let before = state.filtered().clone();
        state.search("Bit");
        assert_eq!(ids(&before), vec!["btc", "eth"]);
        assert_eq!(state.full().len(), 2);
    }

    #[test]
    fn test_receive_resets_search() {
        let mut state = loaded();
        state.search("Bit");
        state.receive(2, scenario());
        assert_eq!(state.filtered(), state.full());
        assert_eq!(state.revision(), 2);
    }

    #[test]
    fn test_refresh_flag_lifecycle() {
        let mut state = loaded();
        assert!(!state.is_refreshing());
        assert!(state.begin_refresh());
        assert!(state.is_refreshing());
        assert!(!state.begin_refresh());
        state.finish_refresh();
        assert!(!state.is_refreshing());
    }

    #[test]
    fn test_empty_store_renders_loading_only() {
        let state = loaded();
        assert_eq!(state.view(&[]), ScreenView::Loading);
        assert_eq!(CurrencyListState::default().view(&[]), ScreenView::Loading);
    }

    #[test]
    fn test_char_class_ranges_and_literals() {
        let class = CharClass::parse("a-cX-");
        assert!(class.contains('b'));
        assert!(class.contains('B'));
        assert!(class.contains('x'));
        assert!(class.contains('-'));
        assert!(!class.contains('d'));

        let reversed = CharClass::parse("z-a");
        assert!(reversed.contains('z'));
        assert!(reversed.contains('-'));
        assert!(!reversed.contains('m'));

        let specials = CharClass::parse("]\\\\-");
        assert!(specials.matches_start("]bracket"));
        assert!(specials.matches_start("\\slash"));
        assert!(specials.matches_start("-dash"));
        assert!(!specials.matches_start("plain"));
        assert!(!specials.matches_start(""));
    }

    #[test]
    fn test_char_class_leading_caret_negates() {
        let mut state = loaded();
        state.search("^bt");
        assert_eq!(ids(state.filtered()), vec!["eth"]);

        let class = CharClass::parse("^bt");
        assert!(!class.contains('B'));
        assert!(class.contains('x'));
        assert!(!class.matches_start(""));

        let caret_later = CharClass::parse("a^");
        assert!(caret_later.contains('^'));
        assert!(!caret_later.contains('b'));
    }

    #[test]
    fn test_char_class_shorthand_escapes() {
        let mut state = loaded();
        state.search("\\w\\w");
        assert_eq!(ids(state.filtered()), vec!["btc", "eth"]);

        let digits = CharClass::parse("\\d");
        assert!(digits.matches_start("1inch"));
        assert!(!digits.matches_start("Bitcoin"));

        let not_word = CharClass::parse("\\W");
        assert!(not_word.contains(' '));
        assert!(!not_word.contains('a'));

        let space = CharClass::parse("\\s");
        assert!(space.contains('\t'));

        let escaped = CharClass::parse("\\]\\-x");
        assert!(escaped.contains(']'));
        assert!(escaped.contains('-'));
        assert!(escaped.contains('X'));
        assert!(!escaped.contains('\\'));

        let trailing = CharClass::parse("ab\\");
        assert!(trailing.contains('\\'));
    }

    #[test]
    fn test_search_length_counts_chars() {
        let mut state = loaded();
        state.search("Bit");
        state.search("😀a");
        assert_eq!(state.filtered(), state.full());

        state.search("😀ab");
        assert_eq!(ids(state.filtered()), vec!["btc"]);
    }

    async fn refresh_until_settled(outcome: Result<(), &'static str>) -> Result<(), &'static str> {
        let list = SharedList::default();
        let (tx, rx) = oneshot::channel::<Result<(), &'static str>>();
        let fetch = async move { rx.await.unwrap_or(Err("dropped")) };

        let task = start_refresh(list.clone(), fetch).expect("refresh should start");
        assert!(list.is_refreshing());

        let (result, ()) = tokio::join!(task, async {
            assert!(list.is_refreshing());
            tx.send(outcome).unwrap();
        });
        assert!(!list.is_refreshing());
        result
    }

    #[tokio::test]
    async fn test_refresh_settles_on_success() {
        assert_eq!(refresh_until_settled(Ok(())).await, Ok(()));
    }

    #[tokio::test]
    async fn test_refresh_settles_on_failure() {
        assert_eq!(refresh_until_settled(Err("offline")).await, Err("offline"));
    }

    #[tokio::test]
    async fn test_refresh_while_refreshing_is_ignored() {
        let list = SharedList::default();
        let first = start_refresh(list.clone(), async { Ok::<(), ()>(()) });
        assert!(first.is_some());
        assert!(start_refresh(list.clone(), async { Ok::<(), ()>(()) }).is_none());

        first.unwrap().await.unwrap();
        assert!(!list.is_refreshing());
        assert!(start_refresh(list.clone(), async { Ok::<(), ()>(()) }).is_some());
    }
}
