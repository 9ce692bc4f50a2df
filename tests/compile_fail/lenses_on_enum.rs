use prismata::Lenses;

#[derive(Lenses)]
enum Shape {
    Circle(f64),
}

fn main() {}
