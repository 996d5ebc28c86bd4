use dirview_host::{ClientConfig, NavigationKey, NormalizedRequest, QueryError};
use dirview_host_web::{host_strategy_name, listing_query_service};
use dirview_runtime::{
    use_resolver, IncorrectLink, PathPreview, ResolverProvider, ResolverServices,
};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

/// Query parameter carrying the listing sort directive.
const SORT_PARAM: &str = "sort";

fn client_config() -> ClientConfig {
    ClientConfig::from_build_env().unwrap_or_else(|err| {
        logging::warn!("build configuration rejected, using defaults: {err}");
        ClientConfig::default()
    })
}

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    let config = client_config();
    logging::log!(
        "dirview using `{}` via {} host",
        config.api_endpoint,
        host_strategy_name()
    );
    let services = ResolverServices::new(listing_query_service(&config));
    let reserved_route = config.reserved_route();

    view! {
        <Meta name="description" content="Directory listing and media preview." />

        <ResolverProvider services=services>
            <Router>
                <main class="site-root">
                    <Routes>
                        <Route path=reserved_route view=IncorrectLink />
                        <Route path="/*any" view=BrowseRoute />
                    </Routes>
                </main>
            </Router>
        </ResolverProvider>
    }
}

fn navigation_request(pathname: &str, query: &ParamsMap) -> Result<NormalizedRequest, QueryError> {
    let sort = query.get(SORT_PARAM).map(String::as_str);
    NavigationKey::from_request(Some(pathname), sort)
}

/// Single routing entry point: derives the navigation key from the location and resolves it.
#[component]
pub fn BrowseRoute() -> impl IntoView {
    let location = use_location();
    let resolver = use_resolver();

    create_effect(move |_| {
        let path = location.pathname.get();
        let request = location.query.with(|query| navigation_request(&path, query));

        match request {
            Ok(normalized) => {
                if let Some(rejected) = normalized.rejected_sort {
                    logging::warn!("{rejected}; using default sort");
                }
                resolver.navigate(normalized.key);
            }
            Err(err) => resolver.reject(err),
        }
    });

    view! { <PathPreview /> }
}

#[cfg(test)]
mod tests {
    use dirview_host::{SortDirective, DEFAULT_SORT};
    use pretty_assertions::assert_eq;

    use super::*;

    fn query(pairs: &[(&str, &str)]) -> ParamsMap {
        let mut map = ParamsMap::new();
        for (key, value) in pairs {
            map.insert(key.to_string(), value.to_string());
        }
        map
    }

    #[test]
    fn location_without_sort_resolves_default_order() {
        let request = navigation_request("/movies/", &query(&[])).expect("request");
        assert_eq!(request.key.path, "/movies/");
        assert_eq!(request.key.sort.as_str(), DEFAULT_SORT);
    }

    #[test]
    fn sort_query_parameter_is_forwarded() {
        let request = navigation_request("/movies/", &query(&[("sort", "name"), ("page", "2")]))
            .expect("request");
        assert_eq!(request.key.sort.as_str(), "name");
        assert!(request.rejected_sort.is_none());

        let empty = navigation_request("/movies/", &query(&[("sort", "")])).expect("request");
        assert_eq!(empty.key.sort, SortDirective::default());
    }

    #[test]
    fn encoded_pathname_and_bad_sort_are_normalized() {
        let request = navigation_request("/My%20Movies/a%23b.mp4", &query(&[("sort", "size")]))
            .expect("request");
        assert_eq!(request.key.path, "/My Movies/a#b.mp4");
        assert_eq!(request.key.sort, SortDirective::default());
        assert_eq!(request.rejected_sort.expect("rejected").key, "size");
    }

    #[test]
    fn undecodable_pathname_is_rejected() {
        let err = navigation_request("/bad%FF", &query(&[])).expect_err("invalid path");
        assert!(matches!(err, QueryError::InvalidPath { .. }));
    }
}
