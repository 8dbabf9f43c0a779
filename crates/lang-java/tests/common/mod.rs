use javadjust_api::{Api, DeclaredType, TypeId};
use std::sync::Once;

#[allow(dead_code)]
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(javadjust_java::logging::init_test_logging);
}

/// Builds an [`Api`] type by type, creating packages on first use.
#[derive(Default)]
pub struct ApiFixture {
    api: Api,
}

#[allow(dead_code)]
impl ApiFixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, package: &str, ty: DeclaredType) -> TypeId {
        if self.api.package(package).is_none() {
            self.api.add_package(package).unwrap();
        }
        self.api.add_type(package, ty).unwrap()
    }

    pub fn with(mut self, package: &str, ty: DeclaredType) -> Self {
        self.add(package, ty);
        self
    }

    pub fn build(self) -> Api {
        self.api
    }
}

#[allow(dead_code)]
pub fn id_of(api: &Api, qualified: &str) -> TypeId {
    api.find_non_generic_type(qualified)
        .unwrap_or_else(|| panic!("type {qualified} not declared"))
}

#[allow(dead_code)]
pub fn type_names(api: &Api) -> Vec<String> {
    api.types().map(|(_, ty)| ty.qualified_name()).collect()
}
