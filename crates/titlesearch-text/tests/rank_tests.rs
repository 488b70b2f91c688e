use titlesearch_core::traits::Scorer;
use titlesearch_core::Item;
use titlesearch_text::{rank, FuzzyScorer};

fn titles(results: &[titlesearch_core::ScoredResult]) -> Vec<&str> {
    results.iter().map(|r| r.item.title.as_str()).collect()
}

#[test]
fn empty_query_keeps_everything_sorted_by_title() {
    let items = vec![Item::new("a", "Zebra"), Item::new("b", "Apple")];
    let results = rank(&FuzzyScorer, &items, "", 200);
    assert_eq!(titles(&results), ["Apple", "Zebra"]);
    assert!(results.iter().all(|r| r.score == 0));
    assert_eq!(results[0].original_index, 1);
    assert_eq!(results[1].item.id, "a");
}

#[test]
fn game_scenario_ranks_partial_match_last() {
    let items = vec![Item::new("1", "Game 1"), Item::new("2", "Game 12"), Item::new("3", "Game 2")];
    let results = rank(&FuzzyScorer, &items, "Game 1", 200);
    assert_eq!(results.len(), 3);
    assert_eq!(results[2].item.title, "Game 2");
    assert!(results[2].score < results[0].score);
    assert!(results[2].score < results[1].score);
    // equal scores fall back to title order
    assert_eq!(titles(&results[..2]), ["Game 1", "Game 12"]);
    assert_eq!(results[2].original_index, 2);
}

#[test]
fn non_empty_query_drops_zero_scores() {
    let items = vec![Item::new("1", "Portal"), Item::new("2", "Quake"), Item::new("3", "Doom")];
    let results = rank(&FuzzyScorer, &items, "qu", 200);
    assert_eq!(titles(&results), ["Quake"]);
    assert!(rank(&FuzzyScorer, &items, "xyz", 200).is_empty());
}

#[test]
fn ties_use_ordinal_case_sensitive_title_order() {
    // uppercase sorts before lowercase in ordinal comparison
    let items = vec![Item::new("1", "banana"), Item::new("2", "Cherry"), Item::new("3", "apple")];
    let results = rank(&FuzzyScorer, &items, "", 200);
    assert_eq!(titles(&results), ["Cherry", "apple", "banana"]);
}

#[test]
fn equal_titles_keep_corpus_order() {
    let items = vec![Item::new("x", "Same"), Item::new("y", "Same"), Item::new("z", "Same")];
    let ids: Vec<_> = rank(&FuzzyScorer, &items, "sa", 200).into_iter().map(|r| r.item.id).collect();
    assert_eq!(ids, ["x", "y", "z"]);
}

#[test]
fn results_are_capped() {
    let items: Vec<Item> = (0..500).map(|i| Item::new(format!("id-{i}"), format!("Game {i}"))).collect();
    assert_eq!(rank(&FuzzyScorer, &items, "game", 200).len(), 200);
    assert_eq!(rank(&FuzzyScorer, &items, "", 200).len(), 200);
    assert_eq!(rank(&FuzzyScorer, &items, "game", 10).len(), 10);
}

#[test]
fn empty_corpus_yields_nothing() {
    assert!(rank(&FuzzyScorer, &[], "anything", 200).is_empty());
    assert!(rank(&FuzzyScorer, &[], "", 200).is_empty());
}

struct LengthScorer;

impl Scorer for LengthScorer {
    fn score(&self, query: &str, target: &str) -> usize {
        if query.is_empty() { 0 } else { target.len() }
    }
}

#[test]
fn any_scorer_can_drive_ranking() {
    let items = vec![Item::new("1", "ab"), Item::new("2", "abcd"), Item::new("3", "abc")];
    let results = rank(&LengthScorer, &items, "q", 200);
    assert_eq!(titles(&results), ["abcd", "abc", "ab"]);
}
