use assert_approx_eq::assert_approx_eq;
use lattice_core::{Color, MathError, Rectangle, Vec2, Vec3, Vector};

#[test]
fn vectors_default_to_zero_in_every_dimension() {
    assert!(Vector::<i64, 1>::default().iter().all(|&c| c == 0));
    assert!(Vector::<f32, 4>::default().iter().all(|&c| c == 0.0));
    assert!(Vector::<u16, 16>::default().iter().all(|&c| c == 0));
}

#[test]
fn normalized_vectors_have_unit_length() {
    let samples = [
        Vec3::new([1.0, 2.0, 3.0]),
        Vec3::new([-0.001, 0.0, 0.0]),
        Vec3::new([1e6, -1e6, 5.0]),
    ];
    for v in samples {
        assert_approx_eq!(v.normalized().unwrap().magnitude(), 1.0_f64, 1e-9);
    }
    assert!(matches!(
        Vec3::<f64>::zero().normalized(),
        Err(MathError::Runtime(_))
    ));
}

#[test]
fn cross_product_is_orthogonal() {
    let pairs = [
        (Vec3::new([1.0, 0.0, 0.0]), Vec3::new([0.0, 1.0, 0.0])),
        (Vec3::new([2.0, -3.0, 0.5]), Vec3::new([0.25, 7.0, -1.0])),
    ];
    for (a, b) in pairs {
        let c = a.cross(&b);
        assert_approx_eq!(c.dot(&a), 0.0_f64, 1e-9);
        assert_approx_eq!(c.dot(&b), 0.0_f64, 1e-9);
    }
}

#[test]
fn translate_round_trip() {
    let rect = Rectangle::new(3, -4, 10, 2).unwrap();
    let d = Vec2::new([17, -8]);
    assert_eq!(rect.translated(d).translated(-d), rect);

    let rect = Rectangle::<f64>::new(0.1, 0.2, 1.0, 1.0).unwrap();
    let d = Vec2::new([0.3, -0.7]);
    let back = rect.translated(d).translated(-d);
    assert_approx_eq!(back.x(), rect.x(), 1e-12);
    assert_approx_eq!(back.y(), rect.y(), 1e-12);
}

#[test]
fn rectangle_scenarios() {
    let rect = Rectangle::new(10, 20, 30, 40).unwrap();
    assert_eq!(rect.right(), 40);
    assert_eq!(rect.bottom(), 60);
    assert_eq!(rect.area(), 1200);
    assert_eq!(rect.perimeter(), 140);

    let square = Rectangle::new(0, 0, 10, 10).unwrap();
    assert!(square.contains(Vec2::new([10, 10])));
    assert!(!square.contains(Vec2::new([11, 5])));

    assert!(matches!(
        Rectangle::new(0, 0, -1, 5),
        Err(MathError::InvalidArgument(_))
    ));
}

#[test]
fn color_scenarios() {
    let gray = Color::rgb(1.0_f32, 0.0, 0.0).grayscale();
    assert_approx_eq!(gray.red(), 0.299, 1e-3);
    assert_eq!(gray.red(), gray.green());
    assert_eq!(gray.green(), gray.blue());
    assert_eq!(gray.alpha(), 1.0);

    let blended = Color::new(1.0_f32, 0.0, 0.0, 0.5).blend_over(&Color::new(0.0, 0.0, 1.0, 1.0));
    assert!(blended.red() > 0.0);
    assert!(blended.blue() > 0.0);
    assert_eq!(blended.green(), 0.0);
    assert_eq!(blended.alpha(), 1.0);
}

#[test]
fn textual_forms() {
    assert_eq!(Vector::new([1, 2, 3]).to_string(), "(1, 2, 3)");
    assert_eq!(
        Rectangle::new(1, 2, 3, 4).unwrap().to_string(),
        "Rectangle(1, 2, 3, 4)"
    );
    assert_eq!(Color::<u8>::CYAN.to_string(), "RGBA(0, 255, 255, 255)");
}
