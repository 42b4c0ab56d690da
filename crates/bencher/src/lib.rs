use http::Request;

#[derive(Debug, Copy, Clone)]
pub struct TestCase {
    name: &'static str,
    group: TestGroup,
    request: TestRequest,
}

impl TestCase {
    pub fn new(name: &'static str, group: TestGroup, request: TestRequest) -> Self {
        Self { name, group, request }
    }

    pub fn small(name: &'static str, request: TestRequest) -> Self {
        Self::new(name, TestGroup::Small, request)
    }

    pub fn normal(name: &'static str, request: TestRequest) -> Self {
        Self::new(name, TestGroup::Normal, request)
    }

    pub fn large(name: &'static str, request: TestRequest) -> Self {
        Self::new(name, TestGroup::Large, request)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn group(&self) -> TestGroup {
        self.group
    }

    pub fn request(&self) -> &TestRequest {
        &self.request
    }
}

/// The uri and headers of a request used as binding input.
#[derive(Debug, Copy, Clone)]
pub struct TestRequest {
    uri: &'static str,
    headers: &'static [(&'static str, &'static str)],
}

impl TestRequest {
    pub const fn new(uri: &'static str, headers: &'static [(&'static str, &'static str)]) -> Self {
        Self { uri, headers }
    }

    pub fn uri(&self) -> &'static str {
        self.uri
    }

    pub fn headers(&self) -> &'static [(&'static str, &'static str)] {
        self.headers
    }

    /// Size of the uri plus all header names and values.
    pub fn len(&self) -> usize {
        self.uri.len() + self.headers.iter().map(|(name, value)| name.len() + value.len()).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// # Panics
    ///
    /// Panics if the uri or one of the headers is invalid.
    pub fn build(&self) -> Request<()> {
        let mut builder = Request::builder().uri(self.uri);
        for (name, value) in self.headers {
            builder = builder.header(*name, *value);
        }
        builder.body(()).expect("test request should be valid")
    }
}

#[derive(Clone, Copy, Debug)]
pub enum TestGroup {
    Small,
    Normal,
    Large,
}
