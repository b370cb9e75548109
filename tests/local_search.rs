mod common;

use common::local_orgs;
use org_lookup::application::services::LocalOrgSearch;
use org_lookup::domain::entities::LocalOrg;
use org_lookup::infrastructure::persistence::MemoryOrgRepository;
use std::sync::Arc;

#[tokio::test]
async fn test_blank_name_lists_everything_but_other() {
    let search = LocalOrgSearch::new(Arc::new(local_orgs()));

    let orgs = search.search("").await;
    let names: Vec<_> = orgs.iter().map(|o| o.name.as_str()).collect();

    assert_eq!(
        names,
        vec![
            "Example College",
            "Sample Institute of Technology",
            "University of Examples"
        ]
    );
}

#[tokio::test]
async fn test_substring_not_prefix() {
    let search = LocalOrgSearch::new(Arc::new(local_orgs()));

    let orgs = search.search("of tech").await;

    assert_eq!(orgs, vec![LocalOrg::new("Sample Institute of Technology", "SIT")]);
}

#[tokio::test]
async fn test_no_match_is_empty() {
    let search = LocalOrgSearch::new(Arc::new(local_orgs()));

    assert!(search.search("3784658y38tyq349g").await.is_empty());
}

#[tokio::test]
async fn test_exact_other_name_is_excluded() {
    let repository = MemoryOrgRepository::new(vec![
        LocalOrg::other("Other"),
        LocalOrg::new("Another College", "AC"),
    ]);
    let search = LocalOrgSearch::new(Arc::new(repository));

    let orgs = search.search("Other").await;

    assert_eq!(orgs, vec![LocalOrg::new("Another College", "AC")]);
}

#[tokio::test]
async fn test_store_loaded_from_json() {
    let repository = MemoryOrgRepository::from_json_str(
        r#"[
            {"name": "Zeta University", "abbreviation": "ZU", "is_other": false},
            {"name": "Alpha College", "abbreviation": "AC", "is_other": false},
            {"name": "Other", "abbreviation": "", "is_other": true}
        ]"#,
    )
    .unwrap();
    let search = LocalOrgSearch::new(Arc::new(repository));

    let orgs = search.search("").await;

    assert_eq!(orgs.len(), 2);
    assert_eq!(orgs[0].name, "Alpha College");
}
