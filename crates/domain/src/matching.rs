// crates/domain/src/matching.rs
//! Source/xml pairing.
//!
//! Pairing first tries to match one source with one xml file per parent
//! directory. That only holds when every directory on both sides has exactly
//! one member; otherwise the whole input is re-paired by file name without
//! extension. The two passes never contribute to the same result.

use std::collections::HashMap;

use file_pairs_shared_kernel::{DomainError, DomainResult};

use crate::{
    grouping::{GroupKey, GroupedPaths},
    model::{FilePair, FilePath, MatchStrategy, PairSet},
};

/// Pairs `sources` with `targets`, falling back from directory to name grouping.
///
/// Pairs are returned in the order their source appears in `sources`.
/// An empty side yields an empty set.
pub fn match_file_pairs(sources: &[FilePath], targets: &[FilePath]) -> DomainResult<PairSet> {
    if sources.is_empty() || targets.is_empty() {
        return Ok(PairSet::empty());
    }
    if let Some(pairs) = pair_by_parent_directory(sources, targets) {
        return Ok(PairSet::new(MatchStrategy::ParentDirectory, pairs));
    }
    pair_by_name(sources, targets).map(|pairs| PairSet::new(MatchStrategy::NameWithoutExtension, pairs))
}

/// One-to-one pairing per parent directory.
///
/// Returns `None` unless both sides have the same set of directories and
/// each directory holds exactly one member on each side.
pub fn pair_by_parent_directory(sources: &[FilePath], targets: &[FilePath]) -> Option<Vec<FilePair>> {
    let strategy = MatchStrategy::ParentDirectory;
    let source_groups = GroupedPaths::build(strategy, sources);
    let target_groups = GroupedPaths::build(strategy, targets);

    if source_groups.len() != target_groups.len() {
        return None;
    }

    let mut pairs = Vec::with_capacity(source_groups.len());
    for (key, members) in source_groups.iter() {
        let [source] = members else { return None };
        let [target] = target_groups.get(key)? else { return None };
        pairs.push(FilePair::new((*source).clone(), (*target).clone()));
    }
    Some(pairs)
}

/// Positional pairing of files sharing a name without extension.
///
/// Every key must exist on both sides with the same number of members.
pub fn pair_by_name(sources: &[FilePath], targets: &[FilePath]) -> DomainResult<Vec<FilePair>> {
    let strategy = MatchStrategy::NameWithoutExtension;
    let source_groups = GroupedPaths::build(strategy, sources);
    let target_groups = GroupedPaths::build(strategy, targets);

    for (key, members) in source_groups.iter() {
        let counterparts = target_groups.get(key).unwrap_or_default();
        if members.len() != counterparts.len() {
            return Err(mismatch(key, members, counterparts));
        }
    }
    if let Some((key, members)) = target_groups.iter().find(|(key, _)| !source_groups.contains(key)) {
        return Err(mismatch(key, &[], members));
    }

    let mut positions: HashMap<GroupKey, usize> = HashMap::with_capacity(source_groups.len());
    let mut pairs = Vec::with_capacity(sources.len());
    for source in sources {
        let key = GroupKey::of(strategy, source);
        let Some(counterparts) = target_groups.get(&key) else {
            return Err(mismatch(&key, &[source], &[]));
        };
        let position = positions.entry(key).or_insert(0);
        pairs.push(FilePair::new(source.clone(), counterparts[*position].clone()));
        *position += 1;
    }
    Ok(pairs)
}

fn mismatch(key: &GroupKey, sources: &[&FilePath], targets: &[&FilePath]) -> DomainError {
    DomainError::UnresolvedGroupMismatch {
        key: key.as_str().to_string(),
        sources: sources.iter().map(|p| p.to_string()).collect(),
        targets: targets.iter().map(|p| p.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(raw: &[&str]) -> Vec<FilePath> {
        raw.iter().copied().map(FilePath::from).collect()
    }

    fn rows(set: &PairSet) -> Vec<(&str, &str)> {
        set.pairs.iter().map(|p| (p.source.as_str(), p.target.as_str())).collect()
    }

    #[test]
    fn pairs_one_to_one_directories_in_source_order() {
        let sources = paths(&["b/x.pdf", "a/y.pdf", "c/z.pdf"]);
        let targets = paths(&["a/y.xml", "c/other.xml", "b/x.xml"]);

        let set = match_file_pairs(&sources, &targets).unwrap();

        assert_eq!(set.strategy, Some(MatchStrategy::ParentDirectory));
        assert_eq!(rows(&set), [("b/x.pdf", "b/x.xml"), ("a/y.pdf", "a/y.xml"), ("c/z.pdf", "c/other.xml")]);
    }

    #[test]
    fn one_crowded_directory_abandons_directory_grouping_everywhere() {
        let sources = paths(&["a/doc1.pdf", "b/doc2.pdf", "b/doc3.pdf"]);
        let targets = paths(&["a/doc1.xml", "b/doc2.xml", "c/doc3.xml"]);

        let set = match_file_pairs(&sources, &targets).unwrap();

        assert_eq!(set.strategy, Some(MatchStrategy::NameWithoutExtension));
        assert_eq!(
            rows(&set),
            [("a/doc1.pdf", "a/doc1.xml"), ("b/doc2.pdf", "b/doc2.xml"), ("b/doc3.pdf", "c/doc3.xml")]
        );
    }

    #[test]
    fn falls_back_to_names_across_directories() {
        let sources = paths(&["a/doc1.pdf", "b/doc2.pdf"]);
        let targets = paths(&["c/doc1.xml", "d/doc2.xml"]);

        let set = match_file_pairs(&sources, &targets).unwrap();

        assert_eq!(set.strategy, Some(MatchStrategy::NameWithoutExtension));
        assert_eq!(rows(&set), [("a/doc1.pdf", "c/doc1.xml"), ("b/doc2.pdf", "d/doc2.xml")]);
    }

    #[test]
    fn directory_missing_on_target_side_falls_back() {
        let sources = paths(&["a/doc1.pdf", "b/doc2.pdf"]);
        let targets = paths(&["a/doc1.xml", "z/doc2.xml"]);

        assert!(pair_by_parent_directory(&sources, &targets).is_none());
        let set = match_file_pairs(&sources, &targets).unwrap();
        assert_eq!(set.strategy, Some(MatchStrategy::NameWithoutExtension));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn extra_target_directory_is_not_dropped() {
        let sources = paths(&["a/doc1.pdf"]);
        let targets = paths(&["a/doc1.xml", "b/doc2.xml"]);

        assert!(pair_by_parent_directory(&sources, &targets).is_none());
        let err = match_file_pairs(&sources, &targets).unwrap_err();
        assert!(matches!(
            err,
            DomainError::UnresolvedGroupMismatch { ref key, ref sources, .. } if key == "doc2" && sources.is_empty()
        ));
    }

    #[test]
    fn count_mismatch_is_fatal() {
        let sources = paths(&["x/doc1.pdf", "x/doc1.pdf"]);
        let targets = paths(&["y/doc1.xml"]);

        let err = match_file_pairs(&sources, &targets).unwrap_err();
        match err {
            DomainError::UnresolvedGroupMismatch { key, sources, targets } => {
                assert_eq!(key, "doc1");
                assert_eq!(sources, ["x/doc1.pdf", "x/doc1.pdf"]);
                assert_eq!(targets, ["y/doc1.xml"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn source_without_counterpart_is_fatal() {
        let sources = paths(&["a/doc1.pdf", "a/doc2.pdf"]);
        let targets = paths(&["b/doc1.xml", "b/doc3.xml"]);

        let err = match_file_pairs(&sources, &targets).unwrap_err();
        assert!(matches!(
            err,
            DomainError::UnresolvedGroupMismatch { ref key, ref targets, .. } if key == "doc2" && targets.is_empty()
        ));
    }

    #[test]
    fn duplicates_pair_positionally() {
        let sources = paths(&["p/doc1.pdf", "q/doc1.pdf", "p/doc1.pdf"]);
        let targets = paths(&["r/doc1.xml", "s/doc1.xml", "t/doc1.xml"]);

        let set = match_file_pairs(&sources, &targets).unwrap();

        assert_eq!(
            rows(&set),
            [("p/doc1.pdf", "r/doc1.xml"), ("q/doc1.pdf", "s/doc1.xml"), ("p/doc1.pdf", "t/doc1.xml")]
        );
    }

    #[test]
    fn compressed_targets_share_the_source_name() {
        let sources = paths(&["pdf/doc1.pdf", "pdf/doc2.pdf"]);
        let targets = paths(&["xml/doc1.xml.gz", "xml/doc2.xml.gz"]);

        let set = match_file_pairs(&sources, &targets).unwrap();
        assert_eq!(rows(&set), [("pdf/doc1.pdf", "xml/doc1.xml.gz"), ("pdf/doc2.pdf", "xml/doc2.xml.gz")]);
    }

    #[test]
    fn empty_side_yields_empty_set() {
        let some = paths(&["a/doc1.pdf"]);

        assert_eq!(match_file_pairs(&[], &[]).unwrap(), PairSet::empty());
        assert!(match_file_pairs(&some, &[]).unwrap().is_empty());
        assert!(match_file_pairs(&[], &some).unwrap().is_empty());
    }
}
