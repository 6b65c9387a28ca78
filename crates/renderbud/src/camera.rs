use glam::{Mat4, Vec2, Vec3, Vec4};

/// A world-space ray used for picking.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Normalized direction.
    pub dir: Vec3,
}

impl Ray {
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }
}

#[derive(Debug, Copy, Clone)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,

    pub fov_y: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(eye: Vec3, target: Vec3) -> Self {
        Self {
            eye,
            target,
            up: Vec3::Y,
            fov_y: 50_f32.to_radians(),
            znear: 0.1,
            zfar: 100.0,
        }
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    fn proj(&self, width: f32, height: f32) -> Mat4 {
        let aspect = width / height.max(1.0);
        Mat4::perspective_rh(self.fov_y, aspect, self.znear, self.zfar)
    }

    pub fn view_proj(&self, width: f32, height: f32) -> Mat4 {
        self.proj(width, height) * self.view()
    }

    /// Unproject a normalized device coordinate (x right, y up, both in
    /// -1..1) into a world-space ray.
    pub fn ray_from_ndc(&self, ndc: Vec2, width: f32, height: f32) -> Ray {
        let inv_vp = self.view_proj(width, height).inverse();
        let near4 = inv_vp * Vec4::new(ndc.x, ndc.y, 0.0, 1.0);
        let far4 = inv_vp * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let near = near4.truncate() / near4.w;
        let far = far4.truncate() / far4.w;
        Ray {
            origin: near,
            dir: (far - near).normalize(),
        }
    }

    /// Convert viewport-relative pixel coordinates (0,0 = top-left) into a
    /// world-space ray.
    pub fn screen_to_ray(&self, screen: Vec2, width: f32, height: f32) -> Ray {
        let ndc_x = (screen.x / width) * 2.0 - 1.0;
        let ndc_y = 1.0 - (screen.y / height) * 2.0;
        self.ray_from_ndc(Vec2::new(ndc_x, ndc_y), width, height)
    }

    /// Project a world point to viewport pixels. Returns the pixel position
    /// and the clip-space w (distance along the view axis), or None when the
    /// point is behind the near plane.
    pub fn project(&self, view_proj: &Mat4, p: Vec3, width: f32, height: f32) -> Option<(Vec2, f32)> {
        let clip = *view_proj * p.extend(1.0);
        if clip.w < self.znear {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        let screen = Vec2::new(
            (ndc.x + 1.0) * 0.5 * width,
            (1.0 - ndc.y) * 0.5 * height,
        );
        Some((screen, clip.w))
    }
}
