//! Navigable addresses.

use std::fmt;

use super::StudentId;

/// Path of the list view.
pub const LIST_PATH: &str = "/students";

/// A navigable address inside the application.
///
/// Parsing never fails: the empty path and any unknown path redirect to the
/// list view.
///
/// ```
/// use roster_core::{Route, StudentId};
///
/// assert_eq!(Route::parse("/students/4"), Route::Detail(StudentId::new(4)));
/// assert_eq!(Route::parse("/students/add"), Route::Add);
/// assert_eq!(Route::parse("/nowhere"), Route::List);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    /// The paged list with search.
    List,
    /// The add form.
    Add,
    /// A single student's detail page.
    Detail(StudentId),
}

impl Route {
    /// Resolve a path such as `/students/12`.
    pub fn parse(path: &str) -> Self {
        let segments: Vec<&str> = path
            .trim()
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();

        match segments.as_slice() {
            ["students"] => Route::List,
            ["students", "add"] => Route::Add,
            ["students", id] => StudentId::parse(id).map_or(Route::List, Route::Detail),
            _ => Route::List,
        }
    }

    /// Returns true if `path` is not the canonical address of what it resolves to.
    pub fn redirects(path: &str) -> bool {
        let route = Self::parse(path);
        route.path() != path.trim().trim_end_matches('/')
    }

    /// Returns the identifier carried by the address, if any.
    pub fn student_id(&self) -> Option<StudentId> {
        match self {
            Route::Detail(id) => Some(*id),
            _ => None,
        }
    }

    /// Returns the canonical path for this route.
    pub fn path(&self) -> String {
        match self {
            Route::List => LIST_PATH.to_string(),
            Route::Add => format!("{}/add", LIST_PATH),
            Route::Detail(id) => format!("{}/{}", LIST_PATH, id),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_path_redirects_to_list() {
        assert_eq!(Route::parse(""), Route::List);
        assert_eq!(Route::parse("/"), Route::List);
        assert!(Route::redirects(""));
    }

    #[test]
    fn list_and_trailing_slash() {
        assert_eq!(Route::parse("/students"), Route::List);
        assert_eq!(Route::parse("/students/"), Route::List);
        assert!(!Route::redirects("/students/"));
    }

    #[test]
    fn add_wins_over_detail() {
        assert_eq!(Route::parse("/students/add"), Route::Add);
    }

    #[test]
    fn detail_carries_id() {
        let route = Route::parse("/students/12");
        assert_eq!(route.student_id(), Some(StudentId::new(12)));
        assert_eq!(route.path(), "/students/12");
    }

    #[test]
    fn non_numeric_id_redirects() {
        assert_eq!(Route::parse("/students/abc"), Route::List);
        assert!(Route::redirects("/students/abc"));
    }

    #[test]
    fn deeper_paths_redirect() {
        assert_eq!(Route::parse("/students/1/edit"), Route::List);
        assert_eq!(Route::parse("/teachers"), Route::List);
    }
}
