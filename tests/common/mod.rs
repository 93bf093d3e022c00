#![allow(dead_code)]

pub mod temp_files {
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::{SystemTime, UNIX_EPOCH};

    static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);
    static TEMP_LOCK: Mutex<()> = Mutex::new(());

    /// Write `content` to a uniquely named file with extension `ext`
    pub fn create_temp_table(content: &str, ext: &str) -> PathBuf {
        let _lock = TEMP_LOCK.lock().unwrap();
        let counter = TEMP_COUNTER.fetch_add(1, Ordering::SeqCst);
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();

        let path = std::env::temp_dir().join(format!(
            "pathtree_test_{}_{}_{}.{}",
            std::process::id(),
            counter,
            nanos,
            ext
        ));

        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn create_temp_yaml(content: &str) -> PathBuf {
        create_temp_table(content, "yaml")
    }

    pub fn create_temp_json(content: &str) -> PathBuf {
        create_temp_table(content, "json")
    }

    pub fn create_temp_toml(content: &str) -> PathBuf {
        create_temp_table(content, "toml")
    }

    /// Best effort
    pub fn cleanup_temp_files(paths: &[PathBuf]) {
        for path in paths {
            let _ = std::fs::remove_file(path);
        }
    }
}

pub mod fixtures {
    /// Pet store route table in YAML
    pub const PET_STORE_YAML: &str = r#"
routes:
  - method: GET
    path: /
    handler: root_handler
  - method: GET
    path: /pets
    handler: list_pets
  - method: POST
    path: /pets
    handler: add_pet
  - method: GET
    path: /pets/{id}
    handler: get_pet
  - method: GET
    path: /users/{user_id}/posts/{post_id}
    handler: get_post
  - method: delete
    path: /pets/{id}
    handler: delete_pet
"#;

    /// Requests against [`PET_STORE_YAML`] and the handler each should reach
    pub const PET_STORE_CASES: &[(&str, &str, Option<&str>)] = &[
        ("GET", "/", Some("root_handler")),
        ("GET", "/pets", Some("list_pets")),
        ("POST", "/pets", Some("add_pet")),
        ("GET", "/pets/42", Some("get_pet")),
        ("DELETE", "/pets/42", Some("delete_pet")),
        ("GET", "/users/9/posts/abc", Some("get_post")),
        ("GET", "/users/9", None),
        ("GET", "/users/9/posts", None),
        ("PUT", "/pets/42", None),
        ("GET", "/does/not/exist", None),
    ];
}
