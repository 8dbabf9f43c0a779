mod common;

use common::{ApiFixture, init_tracing, type_names};
use javadjust_api::{
    Api, DeclaredType, DiagnosticCollector, Field, Method, Severity, TypeParameter,
};
use javadjust_java::{ApiResolver, InterfacePolicy, ResolverConfig};

/// `A extends B extends Missing`, with `C` and `D` holding references to `A`.
fn cascading_api() -> Api {
    ApiFixture::new()
        .with("a", DeclaredType::class("A").with_extends("a.B"))
        .with("a", DeclaredType::class("B").with_extends("a.Missing"))
        .with(
            "a",
            DeclaredType::class("C")
                .with_member(Field::new("a", "a.A"))
                .with_member(Field::new("count", "int")),
        )
        .with(
            "a",
            DeclaredType::class("D")
                .with_type_parameter(TypeParameter::new("T").with_constraint("a.A"))
                .with_member(Method::new("make", "java.util.List<a.A>").with_parameter("n", "int")),
        )
        .with(
            "java.util",
            DeclaredType::interface("List").with_type_parameter(TypeParameter::new("E")),
        )
        .build()
}

#[test]
fn removals_cascade_until_a_fixed_point() {
    init_tracing();
    let mut api = cascading_api();
    let initial = api.type_count();
    let mut sink = DiagnosticCollector::new();

    let summary = ApiResolver::default().resolve_all(&mut api, &mut sink);

    assert!(summary.converged);
    assert_eq!(summary.removed_types, ["a.B", "a.A"]);
    assert_eq!(summary.passes, 3);
    assert!(summary.passes <= initial + 1);
    assert_eq!(type_names(&api), ["a.C", "a.D", "java.util.List"]);

    let c = api.find_type("a.C").unwrap();
    assert_eq!(c.fields().map(|f| f.name.as_str()).collect::<Vec<_>>(), ["count"]);
    let d = api.find_type("a.D").unwrap();
    assert_eq!(d.methods().count(), 0);
    assert!(d.type_parameters[0].constraints[0].unresolvable);

    assert!(api.dangling_holders().is_empty());

    let type_errors: Vec<_> = sink
        .errors()
        .filter(|d| d.message.starts_with("Error while processing type"))
        .map(|d| d.message.as_str())
        .collect();
    assert_eq!(
        type_errors,
        [
            "Error while processing type 'a.B': Type 'a.Missing' was not found.",
            "Error while processing type 'a.A': Type 'a.B' was not found.",
        ]
    );
}

#[test]
fn resolving_a_resolved_api_changes_nothing() {
    let mut api = cascading_api();
    let resolver = ApiResolver::default();
    let mut first = DiagnosticCollector::new();
    resolver.resolve_all(&mut api, &mut first);
    assert!(!first.is_empty());
    let names = type_names(&api);

    let mut second = DiagnosticCollector::new();
    let summary = resolver.resolve_all(&mut api, &mut second);

    assert!(summary.converged);
    assert_eq!(summary.passes, 1);
    assert!(summary.removed_types.is_empty());
    assert_eq!(summary.removed_members, 0);
    assert_eq!(summary.unresolved_constraints, 0);
    assert!(second.is_empty(), "{:?}", second.diagnostics());
    assert_eq!(type_names(&api), names);
}

#[test]
fn classes_are_resolved_before_interfaces() {
    // `I` is declared first but only fails after `C` has already resolved
    // against it, so `C` goes in the next pass.
    let mut api = ApiFixture::new()
        .with("a", DeclaredType::interface("I").with_extends("a.Missing"))
        .with("a", DeclaredType::class("C").with_implements("a.I"))
        .build();
    let mut sink = DiagnosticCollector::new();

    let summary = ApiResolver::default().resolve_all(&mut api, &mut sink);

    assert_eq!(summary.removed_types, ["a.I", "a.C"]);
    assert_eq!(summary.passes, 3);
    assert_eq!(api.type_count(), 0);
    assert_eq!(sink.errors().count(), 2);
}

#[test]
fn forward_and_mutual_references_resolve() {
    init_tracing();
    let mut api = ApiFixture::new()
        .with("a", DeclaredType::class("First").with_member(Field::new("second", "a.Second")))
        .with("a", DeclaredType::class("Second").with_member(Field::new("first", "a.First")))
        .with(
            "a",
            DeclaredType::class("Node")
                .with_type_parameter(
                    TypeParameter::new("T").with_constraint("java.lang.Comparable<T>"),
                )
                .with_extends("java.lang.Object")
                .with_implements("java.lang.Iterable<a.Node<T>>")
                .with_member(Field::new("next", "a.Node<T>"))
                .with_member(Field::new("value", "T")),
        )
        .build();
    let mut sink = DiagnosticCollector::new();

    let summary = ApiResolver::default().resolve_all(&mut api, &mut sink);

    assert!(sink.is_empty(), "{:?}", sink.diagnostics());
    assert_eq!(summary.passes, 1);
    assert_eq!(api.type_count(), 3);
    for (_, ty) in api.types() {
        assert!(ty.members.iter().all(|m| m.is_resolved()), "{ty}");
    }
    let node = api.find_type("a.Node").unwrap();
    assert!(node.extends().is_some_and(|e| e.is_resolved()));
    assert!(node.type_parameters[0].constraints[0].bound.is_resolved());
}

#[test]
fn builtins_can_be_left_out() {
    let build = || {
        ApiFixture::new()
            .with("a", DeclaredType::class("Named").with_member(Field::new("name", "java.lang.String")))
            .build()
    };

    let mut api = build();
    let mut sink = DiagnosticCollector::new();
    ApiResolver::default().resolve_all(&mut api, &mut sink);
    assert!(sink.is_empty());
    assert!(api.has_builtins());

    let mut api = build();
    let config = ResolverConfig {
        install_builtins: false,
        ..ResolverConfig::default()
    };
    let summary = ApiResolver::new(config).resolve_all(&mut api, &mut sink);
    assert_eq!(summary.removed_members, 1);
    assert!(!api.has_builtins());
}

#[test]
fn dropping_interfaces_keeps_the_implementor() {
    let mut api = ApiFixture::new()
        .with("a", DeclaredType::interface("Gone").with_extends("a.Missing"))
        .with(
            "a",
            DeclaredType::class("Impl")
                .with_implements("a.Nowhere")
                .with_implements("java.io.Serializable"),
        )
        .build();
    let config = ResolverConfig {
        interface_policy: InterfacePolicy::DropInterface,
        ..ResolverConfig::default()
    };
    let mut sink = DiagnosticCollector::new();

    let summary = ApiResolver::new(config).resolve_all(&mut api, &mut sink);

    assert!(summary.converged);
    assert_eq!(summary.removed_types.len(), 0);
    assert_eq!(summary.dropped_interfaces, 2);
    assert_eq!(type_names(&api), ["a.Gone", "a.Impl"]);
    assert!(api.find_type("a.Gone").unwrap().implements.is_empty());
    let implements: Vec<_> = api
        .find_type("a.Impl")
        .unwrap()
        .implements
        .iter()
        .map(|i| i.signature.as_str())
        .collect();
    assert_eq!(implements, ["java.io.Serializable"]);
}

#[test]
fn pass_cap_reports_an_unconverged_run() {
    let mut api = cascading_api();
    let config = ResolverConfig {
        max_passes: Some(1),
        ..ResolverConfig::default()
    };
    let mut sink = DiagnosticCollector::new();

    let summary = ApiResolver::new(config).resolve_all(&mut api, &mut sink);

    assert!(!summary.converged);
    assert_eq!(summary.passes, 1);
    assert_eq!(summary.removed_types, ["a.B"]);
    let last = sink.diagnostics().last().unwrap();
    assert_eq!(last.severity, Severity::Warning);
    assert_eq!(last.context, "<api>");
}

#[test]
fn deeply_nested_signatures_only_cost_their_member() {
    let mut api = ApiFixture::new()
        .with(
            "a",
            DeclaredType::class("X")
                .with_member(Field::new("deep", "a.X<".repeat(200_000)))
                .with_member(Field::new("count", "int")),
        )
        .build();
    let mut sink = DiagnosticCollector::new();

    let summary = ApiResolver::default().resolve_all(&mut api, &mut sink);

    assert!(summary.converged);
    assert_eq!(summary.removed_members, 1);
    assert_eq!(type_names(&api), ["a.X"]);
    let x = api.find_type("a.X").unwrap();
    assert_eq!(x.fields().map(|f| f.name.as_str()).collect::<Vec<_>>(), ["count"]);

    assert_eq!(sink.len(), 1);
    let error = &sink.diagnostics()[0];
    assert_eq!(error.severity, Severity::Error);
    assert!(error.message.ends_with("type nesting too deep"));
}
