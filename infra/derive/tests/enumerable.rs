#[test]
fn enumerable_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/enumerable_pass.rs");
    t.pass("tests/ui/enumerable_discriminants.rs");
    t.compile_fail("tests/ui/enumerable_not_enum.rs");
    t.compile_fail("tests/ui/enumerable_generic.rs");
    t.compile_fail("tests/ui/enumerable_tuple_variant.rs");
}
