use pathmap::{Command, Opt};
use std::io::Write;
use std::path::{Path, PathBuf};

pub fn init_logger() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

pub fn opt<P: AsRef<Path>>(config: Option<P>, command: Command) -> Opt {
    Opt {
        config: config.map(|c| c.as_ref().to_path_buf()),
        command,
    }
}

pub fn map_cmd(relative: &str, layout: Option<&str>, modifier: Option<&str>) -> Command {
    Command::Map {
        relative: relative.to_string(),
        layout: layout.map(String::from),
        modifier: modifier.map(String::from),
        base_dir: None,
    }
}

pub fn write_config<P: AsRef<Path>>(dir: P, content: &str) -> PathBuf {
    let path = dir.as_ref().join(pathkit::config::CONFIG_FILE_NAME);
    std::fs::File::create(&path)
        .and_then(|mut f| f.write_all(content.as_bytes()))
        .unwrap();
    path
}
