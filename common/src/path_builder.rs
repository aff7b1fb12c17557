use crate::base_dir::{BaseDirError, BaseDirectory};
use crate::layout::Layout;
use path_clean::PathClean;
use std::borrow::Cow;
use std::fmt::Display;
use std::path::Path;

/// A piece of path that can be joined with others.
///
/// Absent (`None`) and empty fragments are skipped when combining.
pub trait PathFragment {
    fn as_fragment(&self) -> Option<&str>;
}

impl PathFragment for str {
    fn as_fragment(&self) -> Option<&str> {
        Some(self)
    }
}

impl PathFragment for String {
    fn as_fragment(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl PathFragment for Cow<'_, str> {
    fn as_fragment(&self) -> Option<&str> {
        Some(self.as_ref())
    }
}

impl<T: PathFragment + ?Sized> PathFragment for &T {
    fn as_fragment(&self) -> Option<&str> {
        (**self).as_fragment()
    }
}

impl<T: PathFragment> PathFragment for Option<T> {
    fn as_fragment(&self) -> Option<&str> {
        self.as_ref().and_then(|f| f.as_fragment())
    }
}

/// Appends `paths` to `buf`, using `/` as the only separator.
///
/// Backslashes are turned into slashes and leading slashes of every fragment are
/// dropped, so a join point never carries two separators. A fragment left empty
/// after that contributes nothing.
pub fn append_paths<I>(buf: &mut String, paths: I)
where
    I: IntoIterator,
    I::Item: PathFragment,
{
    for path in paths {
        let normalized = match path.as_fragment() {
            Some(p) if !p.is_empty() => p.replace('\\', "/"),
            _ => continue,
        };
        let trimmed = normalized.trim_start_matches('/');
        if trimmed.is_empty() {
            continue;
        }
        if !buf.is_empty() && !buf.ends_with('/') {
            buf.push('/');
        }
        buf.push_str(trimmed);
    }
}

/// Joins path fragments with a single `/`.
///
/// ```
/// assert_eq!(pathkit::combine(["a/", "", "/b"]), "a/b");
/// ```
pub fn combine<I>(paths: I) -> String
where
    I: IntoIterator,
    I::Item: PathFragment,
{
    let mut buf = String::new();
    append_paths(&mut buf, paths);
    trace!("combined path {}", buf);
    buf
}

/// Appends fragments to `base`.
///
/// Trailing separators of `base` are trimmed first, unless `base` is a single
/// character (a bare root stays a root). A single absent fragment returns
/// `base` untouched.
pub fn combine_with<I>(base: &str, paths: I) -> String
where
    I: IntoIterator,
    I::Item: PathFragment,
{
    let paths: Vec<I::Item> = paths.into_iter().collect();
    if let [only] = paths.as_slice() {
        if only.as_fragment().is_none() {
            return base.to_string();
        }
    }
    let start = if base.len() > 1 {
        base.trim_end_matches(&['/', '\\'][..])
    } else {
        base
    };
    let mut buf = String::from(start);
    append_paths(&mut buf, paths);
    trace!("combined path {}", buf);
    buf
}

/// Turns arbitrary displayable values into fragments usable by [`combine_with`].
pub fn fragments_of<I>(values: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: Display,
{
    values.into_iter().map(|v| v.to_string()).collect()
}

/// Length of the part of `path` that `..` can never climb above: a
/// `//server/share` or `//?/...` prefix, or a drive letter.
fn root_prefix_len(path: &str) -> usize {
    let nth_separator = |rest: &str, n: usize| {
        rest.match_indices('/')
            .nth(n)
            .map(|(i, _)| i)
            .unwrap_or(rest.len())
    };
    if let Some(rest) = path.strip_prefix("//?/") {
        let segments = if rest.starts_with("UNC/") { 2 } else { 0 };
        4 + nth_separator(rest, segments)
    } else if let Some(rest) = path.strip_prefix("//") {
        2 + nth_separator(rest, 1)
    } else {
        match path.as_bytes() {
            [drive, b':'] | [drive, b':', b'/', ..] if drive.is_ascii_alphabetic() => 2,
            _ => 0,
        }
    }
}

/// Drops `.` segments and lets `..` consume their parent, below the root prefix.
fn clean_mapped(path: &str) -> String {
    let (root, rest) = path.split_at(root_prefix_len(path));
    let mut mapped = String::from(root);
    if !rest.is_empty() {
        mapped.push_str(&Path::new(rest).clean().to_string_lossy().replace('\\', "/"));
    }
    if path.len() > 1 && path.ends_with('/') && !mapped.ends_with('/') {
        mapped.push('/');
    }
    mapped
}

/// Maps paths relative to an application base directory.
pub struct PathMapper<B> {
    base: B,
}

impl<B: BaseDirectory> PathMapper<B> {
    pub fn new(base: B) -> Self {
        Self { base }
    }

    /// Resolves `relative` against the base directory, escaped by `upward_modifier`.
    ///
    /// A leading `~` in `relative` stands for the base directory itself.
    pub fn map_absolute_path(
        &self,
        relative: &str,
        upward_modifier: Option<&str>,
    ) -> Result<String, BaseDirError> {
        let mut host = self.base.base_directory()?;
        if let Some(modifier) = upward_modifier {
            host.push_str(modifier);
        }
        let relative = relative.strip_prefix('~').unwrap_or(relative);
        let combined = combine_with(&host.replace('\\', "/"), [relative]);
        let mapped = clean_mapped(&combined);
        debug!("mapped {} to {}", relative, mapped);
        Ok(mapped)
    }

    /// Static content copied next to the binary (self-hosted service).
    pub fn map_bin_path(&self, relative: &str) -> Result<String, BaseDirError> {
        self.map_layout_path(relative, &Layout::SelfHosted)
    }

    /// Static content in the parent of the binary directory (web-hosted service).
    pub fn map_host_absolute_path(&self, relative: &str) -> Result<String, BaseDirError> {
        self.map_layout_path(relative, &Layout::WebHosted)
    }

    /// Static content two levels above the binary, e.g. a project run from `target/debug`.
    pub fn map_project_path(&self, relative: &str) -> Result<String, BaseDirError> {
        self.map_layout_path(relative, &Layout::Project)
    }

    pub fn map_layout_path(&self, relative: &str, layout: &Layout) -> Result<String, BaseDirError> {
        self.map_absolute_path(relative, layout.upward_modifier())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base_dir::FixedDirectory;

    fn mapper(base: &str) -> PathMapper<FixedDirectory> {
        PathMapper::new(FixedDirectory::new(base))
    }

    #[test]
    fn test_combine() {
        assert_eq!(combine(Vec::<&str>::new()), "");
        assert_eq!(combine(["a", "", "b"]), "a/b");
        assert_eq!(combine(["a/", "/b"]), "a/b");
        assert_eq!(combine(["a\\b", "\\c\\d"]), "a/b/c/d");
        assert_eq!(combine(["a", "b/"]), "a/b/");
        assert_eq!(combine(["/a", "b"]), "a/b");
        // only separators: nothing is contributed
        assert_eq!(combine(["a", "//", "b"]), "a/b");
        assert_eq!(combine([Some("a"), None, Some("b")]), "a/b");
    }

    #[test]
    fn test_combine_never_doubles_separators() {
        let words = ["foo", "bar", "Baz42", "x", "0"];
        for i in 0..words.len() {
            for j in 0..words.len() {
                let combined = combine([words[i], words[j], words[(i + j) % words.len()]]);
                assert!(!combined.contains("//"), "{}", combined);
                assert!(!combined.contains('\\'), "{}", combined);
            }
        }
    }

    #[test]
    fn test_combine_is_associative() {
        let parts = ["usr\\", "/local/", "bin"];
        let all = combine(parts);
        let first = combine(&parts[..2]);
        assert_eq!(combine([first.as_str(), parts[2]]), all);
        assert_eq!(all, "usr/local/bin");
    }

    #[test]
    fn test_combine_with() {
        assert_eq!(combine_with("base/", ["x"]), "base/x");
        assert_eq!(combine_with("base\\", ["x", "y"]), "base/x/y");
        assert_eq!(combine_with("/", ["x"]), "/x");
        assert_eq!(combine_with("", ["x"]), "x");
        assert_eq!(combine_with("base/", [""]), "base");
        assert_eq!(combine_with("/base", Vec::<&str>::new()), "/base");
    }

    #[test]
    fn test_combine_with_single_absent_fragment() {
        assert_eq!(combine_with("base", [None::<&str>]), "base");
        // short-circuit: no trimming at all
        assert_eq!(combine_with("base//", [None::<&str>]), "base//");
        // more than one fragment goes through the regular path
        assert_eq!(combine_with("base//", [None, Some("x")]), "base/x");
    }

    #[test]
    fn test_fragments_of() {
        let fragments = fragments_of([2024, 7]);
        assert_eq!(combine_with("logs", &fragments), "logs/2024/7");
    }

    #[test]
    fn test_map_resolves_dots() {
        let mapper = mapper("/app/./bin/");
        assert_eq!(mapper.map_absolute_path("x/", None).unwrap(), "/app/bin/x/");
        assert_eq!(
            mapper.map_absolute_path("../../../x", None).unwrap(),
            "/x"
        );
        assert_eq!(
            mapper.map_absolute_path("a/./b/../c", Some("/..")).unwrap(),
            "/app/a/c"
        );
        assert_eq!(
            self::mapper("app/bin").map_absolute_path("../../../b", None).unwrap(),
            "../b"
        );
        assert_eq!(
            self::mapper("C:/app").map_absolute_path("x", Some("/../..")).unwrap(),
            "C:/x"
        );
    }

    #[test]
    fn test_map_keeps_network_roots() {
        assert_eq!(
            mapper("//server/share/bin")
                .map_absolute_path("data.txt", None)
                .unwrap(),
            "//server/share/bin/data.txt"
        );
        assert_eq!(
            mapper("\\\\server\\share\\bin")
                .map_absolute_path("data.txt", Some("\\.."))
                .unwrap(),
            "//server/share/data.txt"
        );
        assert_eq!(
            mapper("//server/share/bin")
                .map_absolute_path("x", Some("/../../.."))
                .unwrap(),
            "//server/share/x"
        );
        assert_eq!(
            mapper("\\\\?\\C:\\app\\bin")
                .map_absolute_path("data.txt", Some("\\.."))
                .unwrap(),
            "//?/C:/app/data.txt"
        );
        assert_eq!(
            mapper("//?/UNC/server/share/bin")
                .map_absolute_path("x", Some("/../.."))
                .unwrap(),
            "//?/UNC/server/share/x"
        );
    }

    #[test]
    fn test_map_absolute_path() {
        let mapper = mapper("/app/bin");
        assert_eq!(
            mapper.map_absolute_path("data.txt", Some("/..")).unwrap(),
            "/app/data.txt"
        );
        assert_eq!(
            mapper.map_absolute_path("data.txt", None).unwrap(),
            "/app/bin/data.txt"
        );
        assert_eq!(
            mapper.map_absolute_path("~/static/site.css", None).unwrap(),
            "/app/bin/static/site.css"
        );
        assert_eq!(
            mapper.map_absolute_path("..\\conf\\app.yml", None).unwrap(),
            "/app/conf/app.yml"
        );
    }

    #[test]
    fn test_layout_presets() {
        let mapper = mapper("/srv/site/target/debug");
        assert_eq!(
            mapper.map_bin_path("a.txt").unwrap(),
            "/srv/site/target/debug/a.txt"
        );
        assert_eq!(
            mapper.map_host_absolute_path("a.txt").unwrap(),
            "/srv/site/target/a.txt"
        );
        assert_eq!(mapper.map_project_path("a.txt").unwrap(), "/srv/site/a.txt");
    }

    #[test]
    fn test_windows_base_directory() {
        let mapper = mapper("C:\\app\\bin");
        assert_eq!(
            mapper.map_absolute_path("data.txt", Some("\\..")).unwrap(),
            "C:/app/data.txt"
        );
    }
}
