use super::*;

fn bounds(left: f64, top: f64, width: f64, height: f64) -> Bounds {
    Bounds { left, top, width, height }
}

#[test]
fn size_is_longer_side() {
    let r = Ripple::at(bounds(0.0, 0.0, 120.0, 40.0), 60.0, 20.0);
    assert_eq!(r.size, 120.0);
}

#[test]
fn ripple_is_centred_on_click() {
    let b = bounds(100.0, 50.0, 80.0, 40.0);
    let r = Ripple::at(b, 130.0, 70.0);
    assert_eq!(r.left + r.size / 2.0, 130.0 - b.left);
    assert_eq!(r.top + r.size / 2.0, 70.0 - b.top);
}

#[test]
fn click_at_corner_gives_negative_offsets() {
    let r = Ripple::at(bounds(10.0, 10.0, 20.0, 20.0), 10.0, 10.0);
    assert_eq!(r.left, -10.0);
    assert_eq!(r.top, -10.0);
}

#[test]
fn style_emits_pixel_values() {
    let r = Ripple { size: 40.0, left: -4.5, top: 2.0 };
    let style = r.style();
    assert_eq!(style[0], ("width", "40px".to_owned()));
    assert_eq!(style[1], ("height", "40px".to_owned()));
    assert_eq!(style[2], ("left", "-4.5px".to_owned()));
    assert_eq!(style[3], ("top", "2px".to_owned()));
}
