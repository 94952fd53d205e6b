#[cfg(test)]
pub mod mock {
    use crate::api::client::{register_mock, MockResponse, TestResponder};
    use crate::api::ApiError;
    use reqwest::Method;
    use serde_json::Value;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    pub const GET: Method = Method::GET;

    /// In-process stand-in for the backend. Routes match on method and path;
    /// each request is recorded so tests can assert on query strings.
    #[derive(Clone)]
    pub struct MockServer {
        inner: Arc<Mutex<Inner>>,
        base: String,
    }

    #[derive(Default)]
    struct Inner {
        routes: Vec<Route>,
        received: Vec<String>,
    }

    #[derive(Clone)]
    struct Route {
        method: Method,
        path: String,
        response: Result<MockResponse, ApiError>,
    }

    impl MockServer {
        pub fn start() -> Self {
            static NEXT_ID: AtomicUsize = AtomicUsize::new(1);
            let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
            Self {
                inner: Arc::new(Mutex::new(Inner::default())),
                base: format!("http://mock-{}", id),
            }
        }

        pub fn url(&self, path: &str) -> String {
            let base_url = format!("{}{}", self.base, path);
            register_mock(base_url.clone(), Arc::new(self.clone()));
            base_url
        }

        pub fn mock<F>(&self, f: F)
        where
            F: FnOnce(&mut When, &mut Then),
        {
            let mut when = When::default();
            let mut then = Then::default();
            f(&mut when, &mut then);

            let method = when.method.clone().expect("mock requires method");
            let path = when.path.clone().expect("mock requires path");
            let response = match then.failure.take() {
                Some(error) => Err(error),
                None => Ok(match then.raw.take() {
                    Some(raw) => MockResponse::text(then.status.unwrap_or(200), raw),
                    None => MockResponse::json(
                        then.status.unwrap_or(200),
                        then.body.take().unwrap_or_else(|| serde_json::json!({})),
                    ),
                }),
            };

            let mut inner = self.inner.lock().expect("mock lock");
            inner.routes.push(Route {
                method,
                path,
                response,
            });
        }

        /// Path and query of every request seen so far, in arrival order.
        pub fn received(&self) -> Vec<String> {
            self.inner.lock().expect("mock lock").received.clone()
        }
    }

    impl TestResponder for MockServer {
        fn respond(&self, request: &reqwest::Request) -> Result<MockResponse, ApiError> {
            let method = request.method();
            let url = request.url();
            let path = url.path();
            let mut inner = self
                .inner
                .lock()
                .map_err(|_| ApiError::unknown("mock lock"))?;

            inner.received.push(match url.query() {
                Some(query) => format!("{}?{}", path, query),
                None => path.to_string(),
            });

            inner
                .routes
                .iter()
                .rev()
                .find(|route| route.method == *method && route.path == path)
                .map(|route| route.response.clone())
                .unwrap_or_else(|| {
                    Err(ApiError::unknown(format!("No mock for {} {}", method, path)))
                })
        }
    }

    #[derive(Default)]
    pub struct When {
        method: Option<Method>,
        path: Option<String>,
    }

    impl When {
        pub fn method(&mut self, method: Method) -> &mut Self {
            self.method = Some(method);
            self
        }

        pub fn path(&mut self, path: &str) -> &mut Self {
            self.path = Some(path.to_string());
            self
        }
    }

    #[derive(Default)]
    pub struct Then {
        status: Option<u16>,
        body: Option<Value>,
        raw: Option<String>,
        failure: Option<ApiError>,
    }

    impl Then {
        pub fn status(&mut self, status: u16) -> &mut Self {
            self.status = Some(status);
            self
        }

        pub fn json_body(&mut self, body: Value) -> &mut Self {
            self.body = Some(body);
            self
        }

        pub fn text_body(&mut self, body: &str) -> &mut Self {
            self.raw = Some(body.to_string());
            self
        }

        /// Simulates a transport failure instead of an HTTP response.
        pub fn network_error(&mut self, message: &str) -> &mut Self {
            self.failure = Some(ApiError::request_failed(message));
            self
        }
    }
}
