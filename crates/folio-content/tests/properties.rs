use folio_content::query;
use folio_content::{ContentRepository, Document, ProjectMetadata};
use proptest::prelude::*;
use proptest::test_runner::Config;

fn doc(index: usize, date: Option<String>, tags: Vec<String>) -> Document {
    Document::new(
        format!("doc-{index}"),
        ProjectMetadata {
            title: format!("Doc {index}"),
            date,
            tags,
            ..Default::default()
        },
    )
}

fn date_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        1 => Just(None),
        1 => Just(Some("not a date".to_string())),
        6 => (2000_i32..2030, 1_u32..=12, 1_u32..=28)
            .prop_map(|(y, m, d)| Some(format!("{y:04}-{m:02}-{d:02}"))),
    ]
}

fn documents_strategy() -> impl Strategy<Value = Vec<Document>> {
    prop::collection::vec(
        (
            date_strategy(),
            prop::collection::vec(prop::sample::select(vec!["rust", "web", "cli", "design"]), 0..4),
        ),
        0..24,
    )
    .prop_map(|entries| {
        let mut docs: Vec<Document> = entries
            .into_iter()
            .enumerate()
            .map(|(i, (date, tags))| doc(i, date, tags.into_iter().map(String::from).collect()))
            .collect();
        query::sort_by_date_desc(&mut docs);
        docs
    })
}

proptest! {
    #![proptest_config(Config::with_cases(128))]

    #[test]
    fn sorted_listing_is_newest_first(docs in documents_strategy()) {
        let keys: Vec<i64> = docs
            .iter()
            .map(|d| folio_content::date::sort_key(d.metadata.date.as_deref()))
            .collect();
        prop_assert!(keys.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn pages_cover_filtered_listing(
        docs in documents_strategy(),
        page_size in 1_usize..7,
        tag in prop::option::of(prop::sample::select(vec!["rust", "web", "missing"])),
    ) {
        let expected: Vec<&Document> = docs
            .iter()
            .filter(|d| tag.is_none_or(|t| d.metadata.has_tag(t)))
            .collect();

        let mut seen = Vec::new();
        let mut page = 1;
        loop {
            let result = query::paginate(&docs, page, page_size, tag).unwrap();
            prop_assert_eq!(result.total, expected.len());
            prop_assert!(result.items.len() <= page_size);
            prop_assert_eq!(result.has_prev, page > 1);
            seen.extend(result.items);
            if !result.has_next {
                break;
            }
            page += 1;
        }

        prop_assert_eq!(seen.len(), expected.len());
        prop_assert!(seen.iter().zip(&expected).all(|(a, b)| a == *b));
    }

    #[test]
    fn tag_counts_are_sorted_and_bounded(docs in documents_strategy()) {
        let counts = query::tag_counts(&docs);

        prop_assert!(counts.windows(2).all(|w| w[0].name < w[1].name));
        for count in &counts {
            let carrying = docs.iter().filter(|d| d.metadata.has_tag(&count.name)).count();
            prop_assert_eq!(count.count, carrying);
            prop_assert!(count.count >= 1);
        }
    }

    #[test]
    fn neighbors_match_positions(
        docs in documents_strategy(),
        pick in any::<prop::sample::Index>(),
    ) {
        prop_assume!(!docs.is_empty());
        let index = pick.index(docs.len());

        let adjacent = query::adjacent(&docs, &docs[index].slug);

        let expected_prev = index.checked_sub(1).map(|i| docs[i].slug.clone());
        let expected_next = docs.get(index + 1).map(|d| d.slug.clone());
        prop_assert_eq!(adjacent.prev.map(|d| d.slug), expected_prev);
        prop_assert_eq!(adjacent.next.map(|d| d.slug), expected_next);
    }
}

#[tokio::test]
async fn three_project_directory() {
    let temp = tempfile::TempDir::new().unwrap();
    let files = [
        ("a", "---\ntitle: A\ndate: 2024-01-01\ntags: [x]\nfeatured: true\n---\nA body"),
        ("b", "---\ntitle: B\ndate: 2023-01-01\ntags: [x, y]\n---\nB body"),
        ("c", "---\ntitle: C\ndate: 2025-01-01\n---\n# C heading"),
    ];
    for (slug, text) in files {
        tokio::fs::write(temp.path().join(format!("{slug}.mdx")), text)
            .await
            .unwrap();
    }
    tokio::fs::write(temp.path().join("notes.txt"), "ignored")
        .await
        .unwrap();

    let repo = ContentRepository::from_dir(temp.path());

    let slugs: Vec<String> = repo.load_all().await.iter().map(|d| d.slug.clone()).collect();
    assert_eq!(slugs, ["c", "a", "b"]);

    let featured = repo.list_featured().await;
    assert_eq!(featured.len(), 1);
    assert_eq!(featured[0].slug, "a");

    let page = repo.list_page(1, 2, Some("x")).await.unwrap();
    assert_eq!(page.total, 2);
    assert_eq!(page.items.len(), 2);
    assert!(!page.has_next);
    assert!(!page.has_prev);

    let tags = repo.tag_aggregates().await;
    assert_eq!(tags.len(), 2);
    assert_eq!((tags[0].name.as_str(), tags[0].count), ("x", 2));
    assert_eq!((tags[1].name.as_str(), tags[1].count), ("y", 1));

    let around_a = repo.adjacent("a").await;
    assert_eq!(around_a.prev.unwrap().slug, "c");
    assert_eq!(around_a.next.unwrap().slug, "b");

    let c = repo.load_one("c").await.unwrap();
    assert!(c.content.unwrap().contains("<h1>C heading</h1>"));
    assert!(repo.load_one("zzz").await.unwrap_err().is_not_found());
}
