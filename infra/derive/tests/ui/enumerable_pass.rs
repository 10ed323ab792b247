use ordo_core::Enumerable as _;
use ordo_derive::Enumerable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enumerable)]
enum Direction {
    North,
    East,
    South,
    West,
}

fn main() {
    assert_eq!(Direction::MEMBERS.len(), 4);
    assert_eq!(Direction::MEMBERS[0].name(), "North");
    assert_eq!(Direction::MEMBERS[3].value(), Direction::West);
    assert_eq!(Direction::South.numeric(), 2);
}
