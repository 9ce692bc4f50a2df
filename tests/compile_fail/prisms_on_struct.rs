use prismata::Prisms;

#[derive(Prisms)]
struct Point {
    x: i32,
}

fn main() {}
