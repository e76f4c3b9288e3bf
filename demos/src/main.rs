// Copyright 2026 the Glidecam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless replay: scripts a drag-fling and a pinch through the controller
//! and prints the camera pose per frame batch.

use glidecam_control::{CameraController, ControllerConfig, InputEvent};
use kurbo::{Point, Rect, Size, Vec2};

const DT: f64 = 1.0 / 60.0;

fn main() {
    let mut controller = CameraController::new(Size::new(800.0, 600.0));
    controller.apply_config(ControllerConfig {
        stop_on_limit: false,
        ..ControllerConfig::default()
    });
    controller
        .camera_mut()
        .set_base_limits(Rect::new(0.0, 0.0, 4000.0, 3000.0));
    controller.camera_mut().set_position(Point::new(2000.0, 1500.0));

    println!("-- drag, then fling --");
    controller.handle_event(InputEvent::TouchDown {
        index: 1,
        position: Point::new(600.0, 300.0),
    });
    let mut x = 600.0;
    for _ in 0..6 {
        controller.tick(DT);
        x -= 40.0;
        controller.handle_event(InputEvent::TouchDrag {
            index: 1,
            position: Point::new(x, 300.0),
            delta: Vec2::new(-40.0, 0.0),
        });
    }
    controller.handle_event(InputEvent::TouchUp {
        index: 1,
        position: Point::new(x, 300.0),
    });
    println!("released at {x:.0}px, phase: {:?}", controller.phase());

    for frame in 0..180_i32 {
        controller.tick(DT);
        if frame % 15 == 0 {
            let pose = controller.camera().position();
            println!(
                "t={:>5.2}s  pos=({:8.2}, {:8.2})  phase={:?}",
                f64::from(frame) * DT,
                pose.x,
                pose.y,
                controller.phase()
            );
        }
    }

    println!("-- pinch to zoom --");
    controller.handle_event(InputEvent::TouchDown {
        index: 1,
        position: Point::new(350.0, 300.0),
    });
    controller.handle_event(InputEvent::TouchDown {
        index: 2,
        position: Point::new(450.0, 300.0),
    });
    // First two-finger move initializes the pinch distance.
    controller.handle_event(InputEvent::TouchDrag {
        index: 2,
        position: Point::new(450.0, 300.0),
        delta: Vec2::ZERO,
    });
    for i in 1..=4_i32 {
        controller.tick(DT);
        let x = 450.0 + 30.0 * f64::from(i);
        controller.handle_event(InputEvent::TouchDrag {
            index: 2,
            position: Point::new(x, 300.0),
            delta: Vec2::new(30.0, 0.0),
        });
        println!(
            "spread to {:>3.0}px  zoom={:.3}  pos=({:8.2}, {:8.2})",
            x - 350.0,
            controller.camera().zoom().x,
            controller.camera().position().x,
            controller.camera().position().y
        );
    }
    controller.handle_event(InputEvent::TouchUp {
        index: 2,
        position: Point::new(570.0, 300.0),
    });
    controller.handle_event(InputEvent::TouchUp {
        index: 1,
        position: Point::new(350.0, 300.0),
    });
    println!("done, phase: {:?}", controller.phase());
}
