use swingy::{
    BallScene, BodyConfig, Color, Damping, ForceSet, PendulumConfig, PendulumScene, Scene,
    SceneConfig, SpringLink, SpringScene, Vec2, ViscousDrag,
};
use wasm_bindgen::prelude::*;

fn js_err(e: swingy::PhysicsError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

// ---- Ball Demo ----

#[wasm_bindgen]
pub struct BallDemo {
    scene: BallScene<f32>,
}

#[wasm_bindgen]
impl BallDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Result<BallDemo, JsValue> {
        let body = BodyConfig::new()
            .with_size(0.4)
            .with_restitution(0.8)
            .with_damping(Damping::Factor(0.999))
            .with_color(Color::from_hex(0xe4572e));
        let scene = BallScene::in_canvas(SceneConfig::new(), width, height, body, 9.81)
            .map_err(js_err)?
            .with_forces(ForceSet::new().with(ViscousDrag::new(0.05).map_err(js_err)?));
        Ok(BallDemo { scene })
    }

    pub fn update(&mut self, dt: f32) {
        self.scene.step(dt);
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) -> bool {
        self.scene.pointer_down(Vec2::new(x, y))
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.scene.pointer_move(Vec2::new(x, y));
    }

    pub fn pointer_up(&mut self) {
        self.scene.pointer_up();
    }

    pub fn set_mass(&mut self, mass: f32) -> Result<(), JsValue> {
        self.scene.body_mut().set_mass(mass).map_err(js_err)
    }

    pub fn set_restitution(&mut self, restitution: f32) -> Result<(), JsValue> {
        self.scene.body_mut().set_restitution(restitution).map_err(js_err)
    }

    pub fn set_gravity(&mut self, g: f32) -> Result<(), JsValue> {
        self.scene.set_gravity(g).map_err(js_err)
    }

    /// Returns [x, y, radius] in pixels
    pub fn state(&self) -> Vec<f32> {
        let p = self.scene.position_px();
        vec![p.x, p.y, self.scene.radius_px()]
    }

    /// Packed 0xRRGGBBAA
    pub fn color(&self) -> u32 {
        self.scene.body().color().to_rgba_u32()
    }
}

// ---- Spring Demo ----

#[wasm_bindgen]
pub struct SpringDemo {
    scene: SpringScene<f32>,
}

#[wasm_bindgen]
impl SpringDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(anchor_x: f32, anchor_y: f32) -> Result<SpringDemo, JsValue> {
        let config = SceneConfig::new();
        let anchor = Vec2::new(anchor_x, anchor_y).scale(1.0 / config.pixels_per_meter);
        let spring = SpringLink::new(anchor, 1.5, 30.0)
            .map_err(js_err)?
            .with_colors(Color::from_hex(0x8d99ae), Color::from_hex(0x2b2d42));
        let body = BodyConfig::new().with_size(0.4).with_damping(Damping::Rate(0.3));
        let scene = SpringScene::new(config, spring, body, 9.81, 0.3, 3.0).map_err(js_err)?;
        Ok(SpringDemo { scene })
    }

    pub fn update(&mut self, dt: f32) {
        self.scene.step(dt);
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) -> bool {
        self.scene.pointer_down(Vec2::new(x, y))
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.scene.pointer_move(Vec2::new(x, y));
    }

    pub fn pointer_up(&mut self) {
        self.scene.pointer_up();
    }

    pub fn set_stiffness(&mut self, stiffness: f32) -> Result<(), JsValue> {
        self.scene.spring_mut().set_stiffness(stiffness).map_err(js_err)
    }

    pub fn set_mass(&mut self, mass: f32) -> Result<(), JsValue> {
        self.scene.body_mut().set_mass(mass).map_err(js_err)
    }

    /// Returns [anchor_x, anchor_y, body_x, body_y] in pixels
    pub fn positions(&self) -> Vec<f32> {
        let a = self.scene.anchor_px();
        let b = self.scene.position_px();
        vec![a.x, a.y, b.x, b.y]
    }
}

// ---- Pendulum Demo ----

#[wasm_bindgen]
pub struct PendulumDemo {
    scene: PendulumScene<f32>,
}

#[wasm_bindgen]
impl PendulumDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(pivot_x: f32, pivot_y: f32, angle: f32) -> Result<PendulumDemo, JsValue> {
        let config = PendulumConfig::new()
            .with_arm_length(2.0)
            .with_size(0.35)
            .with_damping(Damping::Factor(0.999));
        let scene = PendulumScene::new(SceneConfig::new(), Vec2::new(pivot_x, pivot_y), angle, config)
            .map_err(js_err)?;
        Ok(PendulumDemo { scene })
    }

    pub fn update(&mut self, dt: f32) {
        self.scene.step(dt);
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) -> bool {
        self.scene.pointer_down(Vec2::new(x, y))
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.scene.pointer_move(Vec2::new(x, y));
    }

    pub fn pointer_up(&mut self) {
        self.scene.pointer_up();
    }

    pub fn set_arm_length(&mut self, length: f32) -> Result<(), JsValue> {
        let p = self.scene.pendulum();
        let config = PendulumConfig::new()
            .with_arm_length(length)
            .with_gravity(p.gravity())
            .with_damping(p.damping())
            .with_size(p.size())
            .with_gravity_model(p.gravity_model())
            .with_color(p.color());
        self.scene.pendulum_mut().configure(&config).map_err(js_err)
    }

    pub fn angle(&self) -> f32 {
        self.scene.pendulum().angle()
    }

    /// Returns [pivot_x, pivot_y, bob_x, bob_y] in pixels
    pub fn positions(&self) -> Vec<f32> {
        let p = self.scene.pivot_px();
        let b = self.scene.bob_px();
        vec![p.x, p.y, b.x, b.y]
    }
}
