//! List the stored points inside a rectangle.
use kdmap::prelude::*;

fn main() -> Result<(), SpatialError> {
    let mut tree = KdTreeMap::with_capacity(5);
    tree.put(Point2D::new(0.7, 0.2), "a")?;
    tree.put(Point2D::new(0.5, 0.4), "b")?;
    tree.put(Point2D::new(0.2, 0.3), "c")?;
    tree.put(Point2D::new(0.4, 0.7), "d")?;
    tree.put(Point2D::new(0.9, 0.6), "e")?;

    let window = Rect::new(0.0, 0.0, 0.5, 0.5);
    for p in tree.range(window)? {
        println!("{} is inside {}", p, window);
    }
    Ok(())
}
