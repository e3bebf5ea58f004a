//! Default presenter

use helm_core::Result;
use helm_runtime::{Display, Presenter, Renderer, Scene};

/// Clears the target, draws every body with its heading, then presents
pub struct ScenePresenter<T> {
    target: T,
}

impl<T: Display + Renderer> ScenePresenter<T> {
    pub fn new(target: T) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &T {
        &self.target
    }
}

impl<T: Display + Renderer> Presenter for ScenePresenter<T> {
    fn present(&mut self, scene: &Scene) -> Result<()> {
        self.target.clear(scene.background)?;
        for body in &scene.bodies {
            self.target
                .draw_oriented(body.position, body.heading, &body.sprite)?;
        }
        self.target.present()
    }

    fn shutdown(&mut self) -> Result<()> {
        self.target.close()
    }

    fn name(&self) -> &str {
        "scene"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use helm_core::{Color, Sprite, Vec2};
    use helm_kinematics::KinematicBody;

    #[derive(Default)]
    struct RecordingTarget {
        calls: Vec<String>,
    }

    impl Display for RecordingTarget {
        fn clear(&mut self, color: Color) -> Result<()> {
            self.calls.push(format!("clear {:?}", color.to_rgba8()));
            Ok(())
        }

        fn present(&mut self) -> Result<()> {
            self.calls.push("present".into());
            Ok(())
        }

        fn close(&mut self) -> Result<()> {
            self.calls.push("close".into());
            Ok(())
        }
    }

    impl Renderer for RecordingTarget {
        fn draw_oriented(&mut self, position: Vec2, heading: f64, sprite: &Sprite) -> Result<()> {
            self.calls.push(format!(
                "draw {},{} {} {}x{}",
                position.x, position.y, heading, sprite.width, sprite.height
            ));
            Ok(())
        }
    }

    #[test]
    fn clears_draws_then_presents() {
        let scene = Scene::new(Color::WHITE)
            .with_body(KinematicBody::at(400.0, 300.0))
            .with_body(KinematicBody::at(10.0, 20.0).with_heading(45.0));
        let before = scene.clone();

        let mut presenter = ScenePresenter::new(RecordingTarget::default());
        presenter.present(&scene).unwrap();

        assert_eq!(
            presenter.target().calls,
            vec![
                "clear [255, 255, 255, 255]".to_string(),
                "draw 400,300 0 50x30".into(),
                "draw 10,20 45 50x30".into(),
                "present".into(),
            ]
        );
        assert_eq!(scene, before);
    }

    #[test]
    fn shutdown_closes_target() {
        let mut presenter = ScenePresenter::new(RecordingTarget::default());
        presenter.shutdown().unwrap();
        assert_eq!(presenter.target().calls, vec!["close".to_string()]);
    }
}
