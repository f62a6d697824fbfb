//! Config file driven runs

use memtest::{Memtest, MemtestConfig, NoopProgress, PassLimit, CONFIG_FILE_NAME};
use tempfile::TempDir;

#[test]
fn test_run_from_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "megabytes = 1\npasses = 1\nseed = 99\nprogress = false\n").unwrap();

    let config = MemtestConfig::from_file(&path).unwrap();
    assert_eq!(config.pass_limit(), PassLimit::Finite(1));

    let mut memtest = Memtest::<u64>::new(&config).unwrap();
    let summary = memtest.run(&mut NoopProgress).unwrap();
    assert_eq!(summary.passes, 1);
    assert_eq!(summary.bytes, 1024 * 1024);
    assert_eq!(summary.seed, 99);
}

#[test]
fn test_default_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    MemtestConfig::write_default_if_missing(&path).unwrap();
    assert_eq!(MemtestConfig::from_file(&path).unwrap(), MemtestConfig::default());
}
