// Copyright (c) 2026 - present PMDCollab contributors
// SPDX-License-Identifier: MIT

//! End-to-end tests of `ChangeExplorer` over a real git repository

mod fixtures;

use collab_changes::{ChangeExplorer, FailurePolicy, ReportOptions};
use collab_git::GitRepo;
use git2::{IndexAddOption, Repository, Signature};
use similar_asserts::assert_eq;
use std::fs;
use tempfile::TempDir;

const URL: &str = "https://github.com/PMDCollab/SpriteCollab/commit";

/// Write files into a fresh repository and commit them one snapshot at a time
struct AssetRepo {
    dir: TempDir,
    repo: Repository,
}

impl AssetRepo {
    fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let repo = Repository::init(dir.path()).expect("init repo");
        let assets = Self { dir, repo };
        for (path, contents) in fixtures::base_files() {
            assets.write(path, &contents);
        }
        assets
    }

    fn write(&self, path: &str, contents: &[u8]) {
        let full = self.dir.path().join(path);
        fs::create_dir_all(full.parent().expect("file has parent")).expect("create dirs");
        fs::write(full, contents).expect("write file");
    }

    fn delete(&self, path: &str) {
        fs::remove_file(self.dir.path().join(path)).expect("remove file");
    }

    fn commit(&self, message: &str) -> String {
        let mut index = self.repo.index().expect("open index");
        index
            .add_all(["*"], IndexAddOption::DEFAULT, None)
            .expect("stage additions");
        index.update_all(["*"], None).expect("stage removals");
        index.write().expect("write index");
        let tree = self
            .repo
            .find_tree(index.write_tree().expect("write tree"))
            .expect("find tree");

        let sig = Signature::now("SpriteBot", "bot@example.com").expect("signature");
        let parent = self
            .repo
            .head()
            .ok()
            .and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .expect("commit")
            .to_string()
    }

    fn explorer(&self) -> ChangeExplorer<GitRepo> {
        ChangeExplorer::new(GitRepo::open(self.dir.path()).expect("open repo"))
    }
}

#[test]
fn test_report_from_git_history() {
    let assets = AssetRepo::new();
    assets.write("portrait/0001/Normal.png", b"v1");
    assets.write("sprite/0001/Idle-Anim.png", b"v1");
    assets.commit("Baseline");

    assets.write("portrait/0001/Normal.png", b"v2");
    assets.write("portrait/0001/Happy.png", b"v1");
    assets.delete("sprite/0001/Idle-Anim.png");
    let sha = assets.commit("Update Bulbasaur");

    let text = assets
        .explorer()
        .report("HEAD", &ReportOptions::default())
        .expect("report");

    let expected = format!(
        "- [Bob](https://bob.example) [added the happy portrait and changed the normal portrait for Bulbasaur]({URL}/{sha}).\n\
         - the user with the discord id 200 [deleted the idle-anim sprite for Bulbasaur]({URL}/{sha}).\n"
    );
    assert_eq!(text, expected);
}

#[test]
fn test_range_from_git_history() {
    let assets = AssetRepo::new();
    assets.commit("Baseline");

    assets.write("portrait/0025/Normal.png", b"v1");
    let first = assets.commit("Pikachu portrait");
    assets.write("sprite/0025/0001/Walk-Anim.png", b"v1");
    let second = assets.commit("Cosplay sprite");

    let options = ReportOptions {
        tabulation: "*".to_string(),
        ..Default::default()
    };
    let text = assets
        .explorer()
        .report_range(Some(&first[..10]), "HEAD", &options, FailurePolicy::Abort)
        .expect("report range");

    let expected = format!(
        "* Carol [added the walk-anim sprite for Pikachu Cosplay]({URL}/{second}).\n\
         * [Bob](https://bob.example) [added the normal portrait for Pikachu]({URL}/{first}).\n"
    );
    assert_eq!(text, expected);
}

#[test]
fn test_working_directory_is_untouched() {
    let assets = AssetRepo::new();
    assets.write("portrait/0001/Normal.png", b"v1");
    assets.commit("Baseline");
    assets.write("portrait/0001/Normal.png", b"v2");
    let head = assets.commit("Second");
    assets.write("portrait/0001/Normal.png", b"uncommitted");

    let explorer = assets.explorer();
    let previous = explorer.report("HEAD~1", &ReportOptions::default());
    assert!(previous.is_err(), "baseline is a root commit");
    explorer
        .report(&head, &ReportOptions::default())
        .expect("report head");

    let on_disk = fs::read(assets.dir.path().join("portrait/0001/Normal.png")).expect("read");
    assert_eq!(on_disk, b"uncommitted".to_vec());
}
