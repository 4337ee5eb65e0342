use yars_revenge::collision::Rect;

#[test]
fn overlapping_boxes() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(5.0, 5.0, 10.0, 10.0);
    assert!(a.overlaps(&b));
    assert!(b.overlaps(&a));
}

#[test]
fn contained_box_overlaps() {
    let outer = Rect::new(0.0, 0.0, 24.0, 24.0);
    let inner = Rect::new(10.0, 10.0, 4.0, 2.0);
    assert!(outer.overlaps(&inner));
    assert!(inner.overlaps(&outer));
}

#[test]
fn touching_edges_do_not_overlap() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let right = Rect::new(10.0, 0.0, 10.0, 10.0);
    let below = Rect::new(0.0, 10.0, 10.0, 10.0);
    let corner = Rect::new(10.0, 10.0, 10.0, 10.0);
    assert!(!a.overlaps(&right));
    assert!(!a.overlaps(&below));
    assert!(!a.overlaps(&corner));
}

#[test]
fn overlap_needs_both_axes() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    // x intervals overlap, y intervals don't
    let b = Rect::new(5.0, 20.0, 10.0, 10.0);
    assert!(!a.overlaps(&b));
    // y intervals overlap, x intervals don't
    let c = Rect::new(20.0, 5.0, 10.0, 10.0);
    assert!(!a.overlaps(&c));
}
