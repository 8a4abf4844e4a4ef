use yew_router::prelude::*;

/// Paths served by the storefront. The screen itself is chosen from the
/// query string, so the tree only distinguishes the root from unknown paths.
#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Root,
    #[at("/stories")]
    Stories,
    #[at("/404")]
    #[not_found]
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert_eq!(Route::recognize("/"), Some(Route::Root));
        assert_eq!(Route::recognize("/stories"), Some(Route::Stories));
        assert_eq!(Route::recognize("/cart/items"), Some(Route::NotFound));
        assert_eq!(Route::Root.to_path(), "/");
    }
}
