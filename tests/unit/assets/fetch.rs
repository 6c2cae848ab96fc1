use super::*;

#[test]
fn normalize_rel_path_rules() {
    assert_eq!(normalize_rel_path("a/./b\\c.jpg").unwrap(), "a/b/c.jpg");
    assert!(normalize_rel_path("/etc/passwd").is_err());
    assert!(normalize_rel_path("../x.jpg").is_err());
    assert!(normalize_rel_path("./.").is_err());
    assert!(normalize_rel_path("").is_err());
}

#[test]
fn data_uris_base64_and_percent() {
    assert_eq!(decode_data_uri("data:image/png;base64,aGk=").unwrap(), b"hi");
    assert_eq!(decode_data_uri("data:text/plain,a%20b").unwrap(), b"a b");
    assert!(decode_data_uri("data:image/png;base64,***").is_err());
    assert!(decode_data_uri("data:nocomma").is_err());
}

#[test]
fn loader_routes_by_scheme() {
    let remote = MemoryFetcher::new().with("https://x/a.jpg", vec![1, 2, 3]);
    let loader = SourceLoader::new(Arc::new(remote));
    assert_eq!(loader.load("https://x/a.jpg").unwrap(), vec![1, 2, 3]);
    assert!(loader.load("https://x/missing.jpg").is_err());
    assert_eq!(loader.load("data:;base64,AAE=").unwrap(), vec![0, 1]);
    // Relative sources need a root.
    assert!(matches!(loader.load("a.jpg"), Err(FolioError::Asset(_))));
}

#[test]
fn loader_reads_files_under_root() {
    let dir = std::env::temp_dir().join(format!("folio-fetch-{}", std::process::id()));
    std::fs::create_dir_all(dir.join("img")).unwrap();
    std::fs::write(dir.join("img/x.bin"), [9u8, 8, 7]).unwrap();

    let loader = SourceLoader::new(Arc::new(MemoryFetcher::new())).with_root(&dir);
    assert_eq!(loader.load("img/x.bin").unwrap(), vec![9, 8, 7]);
    assert!(loader.load("img/../../x.bin").is_err());
    assert!(loader.load("img/nope.bin").is_err());

    std::fs::remove_dir_all(&dir).unwrap();
}
