use std::fs;

use tempfile::tempdir;

use fsops::{remove, remove_path};

// A batch mixing a directory and a file inside it must succeed regardless of
// the order the two are listed in. Paths are processed last-registered first,
// so the directory listed first is only removed after its descendant.
#[test]
fn batch_with_file_listed_after_its_directory() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let dir = tmp.path().join("dir_a");
    fs::create_dir(&dir)?;
    let file = dir.join("inside.txt");
    fs::write(&file, b"x")?;

    remove([dir.clone(), file.clone()], 0)?;

    assert!(!file.exists());
    assert!(!dir.exists());
    Ok(())
}

#[test]
fn batch_with_file_listed_before_its_directory() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let dir = tmp.path().join("dir_a");
    fs::create_dir(&dir)?;
    let file = dir.join("inside.txt");
    fs::write(&file, b"x")?;

    remove([file.clone(), dir.clone()], 0)?;

    assert!(!file.exists());
    assert!(!dir.exists());
    Ok(())
}

// Removing a subset of a directory's contents must leave every unlisted
// sibling exactly where it was.
#[test]
fn batch_leaves_unlisted_siblings_in_place() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let main = tmp.path().join("remove_test");
    fs::create_dir_all(main.join("level2").join("level3"))?;
    fs::create_dir(main.join("level2-2"))?;
    fs::write(main.join("file1.txt"), b"")?;
    fs::write(main.join("file2.txt"), b"")?;
    fs::write(main.join("level2").join("level3").join("file3.txt"), b"")?;

    remove([main.join("file1.txt"), main.join("level2")], 0)?;

    let mut survivors: Vec<String> = fs::read_dir(&main)?
        .map(|e| Ok(e?.file_name().to_string_lossy().into_owned()))
        .collect::<Result<_, Box<dyn std::error::Error>>>()?;
    survivors.sort();
    assert_eq!(survivors, ["file2.txt", "level2-2"]);
    Ok(())
}

// cascade_empty_parents=1 prunes only the file's own directory; a budget
// larger than the nesting depth prunes every empty ancestor it can reach but
// never crosses a non-empty one.
#[test]
fn cascade_budget_bounds_ancestor_pruning() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let base = tmp.path().join("base");
    let nested = base.join("1").join("2").join("3");

    fs::create_dir_all(&nested)?;
    let file = nested.join("file.txt");
    fs::write(&file, b"")?;

    remove_path(&file, 1)?;
    assert!(!nested.exists());
    assert!(base.join("1").join("2").exists());

    fs::create_dir_all(&nested)?;
    fs::write(&file, b"")?;

    remove_path(&file, 3)?;
    assert!(base.exists());
    assert!(!base.join("1").exists());
    Ok(())
}

#[test]
fn cascade_spares_sibling_contents() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let nested = tmp.path().join("a").join("b").join("c");
    fs::create_dir_all(&nested)?;
    let sibling = tmp.path().join("a").join("sibling.txt");
    fs::write(&sibling, b"keep me")?;
    let file = nested.join("file.txt");
    fs::write(&file, b"")?;

    remove_path(&file, 5)?;

    assert!(!tmp.path().join("a").join("b").exists());
    assert!(sibling.exists());
    assert_eq!(fs::read_to_string(&sibling)?, "keep me");
    Ok(())
}

// A cascade budget larger than a relative path's nesting depth must stop at
// the top of the path instead of walking on into the process working
// directory, and must not fail after everything prunable is already gone.
// (The other tests here use absolute tempdir paths, so the cwd change is
// invisible to them.)
#[test]
fn cascade_on_relative_path_stops_at_its_top() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    std::env::set_current_dir(tmp.path())?;
    fs::create_dir_all("a/b/c")?;
    fs::write("a/b/c/file.txt", b"")?;

    remove_path("a/b/c/file.txt", 4)?;

    assert!(!tmp.path().join("a").exists());
    Ok(())
}

// A failure partway through a batch aborts the call: paths processed before
// the failing one (i.e. listed after it) stay removed, paths after it are
// left untouched. A file used as a directory component makes the stat fail
// deterministically.
#[test]
fn batch_failure_keeps_earlier_removals_and_skips_the_rest()
-> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let blocker = tmp.path().join("blocker.txt");
    fs::write(&blocker, b"")?;
    let bad = blocker.join("child");

    let removed = tmp.path().join("removed.txt");
    let untouched = tmp.path().join("untouched.txt");
    fs::write(&removed, b"")?;
    fs::write(&untouched, b"")?;

    // Reverse processing order: removed.txt first, then the bad path fails,
    // untouched.txt is never reached.
    let err = remove([untouched.clone(), bad.clone(), removed.clone()], 0).unwrap_err();
    assert_eq!(err.path(), Some(bad.as_path()));
    assert!(!removed.exists());
    assert!(untouched.exists());
    Ok(())
}
