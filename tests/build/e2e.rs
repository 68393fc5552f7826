//! End-to-end tests for the build workflow.

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use verbindex::build::BuildConfig;
use verbindex::testing::{make_form, make_infinitive, write_record};
use verbindex::{run_build, BuildError, IndexTarget, IndexedEntry, VerbIndex};

fn build_into(corpus: &Path, index_dir: &Path) -> verbindex::BuildOutput {
    let config =
        BuildConfig::new(corpus).with_target(IndexTarget::Directory(index_dir.to_path_buf()));
    match run_build(&config) {
        Ok(output) => output,
        Err(e) => panic!("build should succeed: {}", e),
    }
}

fn path_of(dir: &Path, lemma: &str) -> String {
    dir.join(format!("{}.json", lemma))
        .to_string_lossy()
        .into_owned()
}

#[test]
fn test_cross_lemma_collision_is_qualified() {
    let temp_dir = TempDir::new().unwrap();
    let corpus = temp_dir.path().join("jsons");
    let index_dir = temp_dir.path().join("indexdir");

    write_record(
        &corpus,
        "cantar",
        &[make_infinitive("cantar"), make_form("Present", &["canto", "cantes", "canta"])],
    )
    .unwrap();
    write_record(
        &corpus,
        "plantar",
        &[make_infinitive("plantar"), make_form("Present", &["planto", "plantes", "canta"])],
    )
    .unwrap();

    let output = build_into(&corpus, &index_dir);
    assert_eq!(output.summary.files, 2);
    assert_eq!(output.summary.entries, 8);
    assert_eq!(output.summary.collisions, 1);

    let entries = VerbIndex::open(&index_dir).unwrap().committed_entries().unwrap();
    let forms: Vec<&str> = entries.iter().map(|e| e.verb_form.as_str()).collect();
    assert!(forms.contains(&"canta (cantar)"));
    assert!(forms.contains(&"canta (plantar)"));
    assert!(!forms.contains(&"canta"));

    let qualified: Vec<&IndexedEntry> = entries
        .iter()
        .filter(|e| e.verb_form.starts_with("canta ("))
        .collect();
    assert_eq!(qualified[0].file_path, path_of(&corpus, "cantar"));
    assert_eq!(qualified[1].file_path, path_of(&corpus, "plantar"));
    assert!(qualified.iter().all(|e| e.index_letter.is_none()));
}

#[test]
fn test_single_lemma_infinitive_unchanged_with_letter() {
    let temp_dir = TempDir::new().unwrap();
    let corpus = temp_dir.path().join("jsons");
    let index_dir = temp_dir.path().join("indexdir");
    write_record(&corpus, "parlar", &[make_infinitive("parlar")]).unwrap();

    let output = build_into(&corpus, &index_dir);
    assert_eq!(output.summary.collisions, 0);

    let entries = output.index.committed_entries().unwrap();
    assert_eq!(
        entries,
        vec![IndexedEntry {
            verb_form: "parlar".to_string(),
            file_path: path_of(&corpus, "parlar"),
            index_letter: Some("p".to_string()),
        }]
    );
}

#[test]
fn test_accented_infinitive_gets_folded_letter() {
    let temp_dir = TempDir::new().unwrap();
    let corpus = temp_dir.path().join("jsons");
    write_record(&corpus, "ésser", &[make_infinitive("Èsser")]).unwrap();

    let config = BuildConfig::new(&corpus).with_target(IndexTarget::Ram);
    let output = run_build(&config).unwrap_or_else(|e| panic!("{}", e));
    let entries = output.index.committed_entries().unwrap();
    assert_eq!(entries[0].index_letter.as_deref(), Some("e"));
}

#[test]
fn test_rebuild_is_idempotent_and_destructive() {
    let temp_dir = TempDir::new().unwrap();
    let corpus = temp_dir.path().join("jsons");
    let index_dir = temp_dir.path().join("indexdir");
    write_record(
        &corpus,
        "cantar",
        &[make_infinitive("cantar"), make_form("Present", &["canto/cante", "cantes", "canta"])],
    )
    .unwrap();
    write_record(
        &corpus,
        "decantar",
        &[make_infinitive("decantar"), make_form("Present", &["", "", "canta"])],
    )
    .unwrap();

    let first = build_into(&corpus, &index_dir).index.committed_entries().unwrap();
    let second = build_into(&corpus, &index_dir).index.committed_entries().unwrap();
    assert_eq!(first, second);
    assert_eq!(first.len(), 7);

    // A removed record disappears from the next build.
    fs::remove_file(corpus.join("decantar.json")).unwrap();
    let third = build_into(&corpus, &index_dir).index.committed_entries().unwrap();
    assert_eq!(third.len(), 5);
    assert!(third.iter().any(|e| e.verb_form == "canta"));
}

#[test]
fn test_empty_corpus_commits_empty_index() {
    let temp_dir = TempDir::new().unwrap();
    let corpus = temp_dir.path().join("jsons");
    fs::create_dir_all(&corpus).unwrap();
    let index_dir = temp_dir.path().join("indexdir");

    let output = build_into(&corpus, &index_dir);
    assert_eq!(output.summary.files, 0);
    assert_eq!(output.summary.entries, 0);
    assert_eq!(output.summary.collisions, 0);
    assert!(VerbIndex::open(&index_dir)
        .unwrap()
        .committed_entries()
        .unwrap()
        .is_empty());
}

#[test]
fn test_unremovable_storage_is_storage_conflict() {
    let temp_dir = TempDir::new().unwrap();
    let corpus = temp_dir.path().join("jsons");
    write_record(&corpus, "parlar", &[make_infinitive("parlar")]).unwrap();

    let blocker = temp_dir.path().join("blocker");
    fs::write(&blocker, "a file, not a directory").unwrap();

    let config =
        BuildConfig::new(&corpus).with_target(IndexTarget::Directory(blocker.join("indexdir")));
    let err = run_build(&config).err().expect("storage conflict must abort");
    assert!(matches!(err, BuildError::StorageConflict { .. }), "{}", err);
}

#[test]
fn test_same_lemma_in_two_files_collides_only_with_other_lemmas() {
    let temp_dir = TempDir::new().unwrap();
    let corpus = temp_dir.path().join("jsons");
    let index_dir = temp_dir.path().join("indexdir");
    let first = corpus.join("a");
    let second = corpus.join("b");
    write_record(&first, "cantar", &[make_form("Present", &["", "", "canta"])]).unwrap();
    write_record(&second, "cantar", &[make_form("Present", &["", "", "canta"])]).unwrap();

    let output = build_into(&corpus, &index_dir);
    assert_eq!(output.summary.files, 2);
    assert_eq!(output.summary.collisions, 0);
    let entries = output.index.committed_entries().unwrap();
    let forms: Vec<&str> = entries.iter().map(|e| e.verb_form.as_str()).collect();
    assert_eq!(forms, vec!["canta", "canta"]);

    write_record(&corpus, "decantar", &[make_form("Present", &["", "", "canta"])]).unwrap();
    let output = build_into(&corpus, &index_dir);
    assert_eq!(output.summary.collisions, 1);

    let entries = output.index.committed_entries().unwrap();
    let qualified: Vec<(&str, &str)> = entries
        .iter()
        .map(|e| (e.verb_form.as_str(), e.file_path.as_str()))
        .collect();
    let first_path = path_of(&first, "cantar");
    let second_path = path_of(&second, "cantar");
    let third_path = path_of(&corpus, "decantar");
    assert_eq!(
        qualified,
        vec![
            ("canta (cantar)", first_path.as_str()),
            ("canta (cantar)", second_path.as_str()),
            ("canta (decantar)", third_path.as_str()),
        ]
    );
}
