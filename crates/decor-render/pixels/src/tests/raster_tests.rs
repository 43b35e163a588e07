use super::*;
use decor_ui::PaintLayer;

const WIDTH: u32 = 120;
const HEIGHT: u32 = 52;
const WHITE: [u8; 4] = [255, 255, 255, 255];
const BLACK: [u8; 4] = [0, 0, 0, 255];

fn card() -> Rect {
    Rect {
        x: 0.0,
        y: 0.0,
        width: WIDTH as f32,
        height: HEIGHT as f32,
    }
}

fn border_scene(width: f32) -> RecordedRenderScene {
    stroked_scene(Brush::solid(Color::BLACK), width)
}

fn stroked_scene(brush: Brush, width: f32) -> RecordedRenderScene {
    RecordedRenderScene::new(vec![RenderOp::Primitive {
        node_id: 0,
        layer: PaintLayer::Overlay,
        primitive: DrawPrimitive::RoundRectBorder {
            rect: card(),
            brush,
            radii: CornerRadii::uniform(5.0),
            width,
        },
    }])
}

fn rasterize(scene: &RecordedRenderScene) -> Vec<u8> {
    let mut frame = vec![0; (WIDTH * HEIGHT * 4) as usize];
    draw_scene(&mut frame, WIDTH, HEIGHT, scene, Color::WHITE).expect("draw");
    frame
}

fn pixel(frame: &mut [u8], x: u32, y: u32) -> [u8; 4] {
    FrameTarget::new(frame, WIDTH, HEIGHT)
        .expect("frame")
        .pixel(x, y)
        .expect("in bounds")
}

#[test]
fn border_paints_only_the_stroke_band() {
    let mut frame = rasterize(&border_scene(3.0));
    assert_eq!(pixel(&mut frame, 60, 0), BLACK);
    assert_eq!(pixel(&mut frame, 60, 2), BLACK);
    assert_eq!(pixel(&mut frame, 0, 26), BLACK);
    assert_eq!(pixel(&mut frame, 119, 26), BLACK);
    assert_eq!(pixel(&mut frame, 60, 3), WHITE);
    assert_eq!(pixel(&mut frame, 60, 26), WHITE);
}

#[test]
fn rounded_corners_stay_clear() {
    let mut frame = rasterize(&border_scene(3.0));
    assert_eq!(pixel(&mut frame, 0, 0), WHITE);
    assert_eq!(pixel(&mut frame, 119, 51), WHITE);
}

#[test]
fn non_positive_width_paints_nothing() {
    for width in [0.0, -3.0, f32::NAN] {
        let frame = rasterize(&border_scene(width));
        assert!(frame.chunks_exact(4).all(|px| px == WHITE));
    }
}

#[test]
fn stroke_wider_than_the_shape_fills_it() {
    let mut frame = rasterize(&border_scene(40.0));
    assert_eq!(pixel(&mut frame, 60, 26), BLACK);
}

#[test]
fn gradient_border_shades_from_top_to_bottom() {
    let gradient = Brush::linear_gradient(vec![Color::BLACK, Color::WHITE]);
    let mut frame = rasterize(&stroked_scene(gradient, 3.0));
    assert_eq!(pixel(&mut frame, 60, 0), [2, 2, 2, 255]);
    assert_eq!(pixel(&mut frame, 60, 51), [253, 253, 253, 255]);
    assert_eq!(pixel(&mut frame, 0, 26), [130, 130, 130, 255]);
    assert_eq!(pixel(&mut frame, 60, 26), WHITE);
}

#[test]
fn translucent_fill_blends_with_background() {
    let scene = RecordedRenderScene::new(vec![RenderOp::Primitive {
        node_id: 0,
        layer: PaintLayer::Behind,
        primitive: DrawPrimitive::RoundRect {
            rect: card(),
            brush: Brush::solid(Color::BLACK.with_alpha(0.5)),
            radii: CornerRadii::uniform(5.0),
        },
    }]);
    let mut frame = rasterize(&scene);
    assert_eq!(pixel(&mut frame, 10, 10), [128, 128, 128, 255]);
}

#[test]
fn mismatched_frame_is_rejected() {
    let mut frame = vec![0; 16];
    let err = draw_scene(&mut frame, WIDTH, HEIGHT, &border_scene(3.0), Color::WHITE)
        .expect_err("size mismatch");
    assert!(matches!(
        err,
        RenderError::FrameSize {
            expected: 24960,
            actual: 16,
            ..
        }
    ));
}

#[test]
fn pixel_outside_frame_is_none() {
    let mut frame = rasterize(&RecordedRenderScene::default());
    let target = FrameTarget::new(&mut frame, WIDTH, HEIGHT).expect("frame");
    assert_eq!(target.pixel(WIDTH, 0), None);
}
