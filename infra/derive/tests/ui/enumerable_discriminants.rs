use ordo_core::Enumerable as _;
use ordo_derive::Enumerable;

// Explicit discriminants must flow into the numeric column while
// ordinals stay positional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enumerable)]
enum Foo {
    None = 0,
    First = 1,
    Second = 2,
    Fifty = 5,
}

fn main() {
    assert_eq!(Foo::MEMBERS.len(), 4);
    assert_eq!(Foo::MEMBERS[3].name(), "Fifty");
    assert_eq!(Foo::MEMBERS[3].numeric(), 5);
    assert_eq!(Foo::Fifty.numeric(), 5);
}
