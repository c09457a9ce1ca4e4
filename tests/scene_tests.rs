//! End-to-end tests: whole documents in, primitive sequences out.

use svgscene::{Color, Point, Primitive, Recorder, Scene, Shape};

fn draw(source: &str) -> Vec<Primitive> {
    let scene: Scene = source.parse().expect("document should build");
    let mut canvas = Recorder::new();
    scene.draw(&mut canvas);
    canvas.primitives
}

fn pt(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

#[test]
fn a_small_document_renders_in_document_order() {
    let prims = draw(
        r#"<svg width="200" height="100">
             <rect x="0" y="0" width="200" height="100" fill="white"/>
             <circle cx="50" cy="50" r="20" fill="red"/>
             <line x1="0" y1="0" x2="199" y2="99" stroke="black"/>
           </svg>"#,
    );

    assert_eq!(prims.len(), 3);
    match &prims[0] {
        Primitive::Polygon { points, color } => {
            assert_eq!(points, &vec![pt(0, 0), pt(199, 0), pt(199, 99), pt(0, 99)]);
            assert_eq!(*color, Color::WHITE);
        }
        other => panic!("expected background rect, got {other:?}"),
    }
    assert!(matches!(prims[1], Primitive::Ellipse { .. }));
    assert!(matches!(prims[2], Primitive::Line { .. }));
}

#[test]
fn group_z_order_matches_the_flattened_sequence() {
    let grouped = draw(
        r#"<svg width="10" height="10">
             <g>
               <rect x="0" y="0" width="4" height="4" fill="red"/>
               <circle cx="2" cy="2" r="1" fill="blue"/>
             </g>
           </svg>"#,
    );
    let flat = draw(
        r#"<svg width="10" height="10">
             <rect x="0" y="0" width="4" height="4" fill="red"/>
             <circle cx="2" cy="2" r="1" fill="blue"/>
           </svg>"#,
    );
    assert_eq!(grouped, flat);
}

#[test]
fn transforms_compose_through_nested_groups() {
    // Outer translation applies after the inner rotation, both after the
    // shape's own attribute transform.
    let prims = draw(
        r#"<svg width="100" height="100">
             <g transform="translate(10 0)">
               <g transform="rotate(90)">
                 <line x1="1" y1="0" x2="3" y2="0" stroke="black" transform="translate(1 0)"/>
               </g>
             </g>
           </svg>"#,
    );

    // Shape transform: (1,0)-(3,0) -> (2,0)-(4,0); rotate 90 about (0,0)
    // clockwise on screen -> (0,2)-(0,4); translate -> (10,2)-(10,4).
    assert_eq!(
        prims,
        vec![Primitive::Line {
            p1: pt(10, 2),
            p2: pt(10, 4),
            color: Color::BLACK,
        }]
    );
}

#[test]
fn use_resolution_is_order_sensitive_across_the_document() {
    let prims = draw(
        r##"<svg width="100" height="100">
             <use href="#tile"/>
             <g id="tile">
               <rect x="0" y="0" width="2" height="2" fill="red"/>
             </g>
             <use href="#tile" transform="translate(5 5)"/>
             <use href="#missing"/>
           </svg>"##,
    );

    // The forward and dangling references vanish; the backward one clones.
    assert_eq!(prims.len(), 2);
    match &prims[1] {
        Primitive::Polygon { points, .. } => {
            assert_eq!(points, &vec![pt(5, 5), pt(6, 5), pt(6, 6), pt(5, 6)]);
        }
        other => panic!("expected cloned rect, got {other:?}"),
    }
}

#[test]
fn cloned_subtrees_are_independent_of_their_source() {
    let mut scene: Scene = r##"<svg width="100" height="100">
           <g id="pair">
             <circle cx="1" cy="1" r="1" fill="red"/>
             <circle cx="3" cy="1" r="1" fill="blue"/>
           </g>
           <use href="#pair"/>
         </svg>"##
        .parse()
        .expect("document should build");

    // Mutate only the clone; the original group must not move.
    scene.elements[1].translate(pt(10, 10));

    let mut canvas = Recorder::new();
    scene.draw(&mut canvas);
    match (&canvas.primitives[0], &canvas.primitives[2]) {
        (
            Primitive::Ellipse { center: original, .. },
            Primitive::Ellipse { center: clone, .. },
        ) => {
            assert_eq!(*original, pt(1, 1));
            assert_eq!(*clone, pt(11, 11));
        }
        other => panic!("expected ellipses, got {other:?}"),
    }
}

#[test]
fn rotate_about_a_transform_origin_pivot() {
    let prims = draw(
        r#"<svg width="100" height="100">
             <line x1="6" y1="5" x2="7" y2="5" stroke="black"
                   transform="rotate(90)" transform-origin="5 5"/>
           </svg>"#,
    );
    assert_eq!(
        prims,
        vec![Primitive::Line {
            p1: pt(5, 6),
            p2: pt(5, 7),
            color: Color::BLACK,
        }]
    );
}

#[test]
fn ellipse_scale_about_a_noncentral_pivot_moves_center_and_radius() {
    let prims = draw(
        r#"<svg width="100" height="100">
             <ellipse cx="6" cy="8" rx="2" ry="1" fill="red"
                      transform="scale(3)" transform-origin="2 2"/>
           </svg>"#,
    );
    // Center: (6,8) relative to (2,2) is (4,6), scaled to (12,18), back to
    // (14,20). Radius is a vector: (2,1) -> (6,3).
    assert_eq!(
        prims,
        vec![Primitive::Ellipse {
            center: pt(14, 20),
            radius: pt(6, 3),
            color: Color::new(0xff, 0, 0),
        }]
    );
}

#[test]
fn polyline_renders_connected_segments_in_order() {
    let prims = draw(
        r#"<svg width="100" height="100">
             <polyline points="0,0 10,0 10,10 0,10" stroke="navy"/>
           </svg>"#,
    );
    let navy = Color::new(0, 0, 0x80);
    assert_eq!(
        prims,
        vec![
            Primitive::Line { p1: pt(0, 0), p2: pt(10, 0), color: navy },
            Primitive::Line { p1: pt(10, 0), p2: pt(10, 10), color: navy },
            Primitive::Line { p1: pt(10, 10), p2: pt(0, 10), color: navy },
        ]
    );
}
