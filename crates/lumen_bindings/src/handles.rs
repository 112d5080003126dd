//! Opaque handles to host-owned objects
//!
//! Handles are the raw `i32` keys the host hands out. They carry no lifetime
//! guarantee past the current callback. The host keys component handles by
//! the owning entity, so a component handle is only ever obtained through an
//! [`Entity`] accessor.

use crate::api::HostApi;
use lumen_math::{Color, Quat, Vec2, Vec3};

macro_rules! handle {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(transparent)]
        pub struct $name(pub i32);

        impl $name {
            /// Wrap a raw key received from the host
            #[inline]
            pub const fn from_raw(raw: i32) -> Self {
                Self(raw)
            }

            /// Raw key as passed across the binding boundary
            #[inline]
            pub const fn raw(self) -> i32 {
                self.0
            }
        }
    };
}

handle!(
    /// Scene entity
    Entity
);
handle!(
    /// Transform attached to an entity
    TransformComponent
);
handle!(
    /// Point light attached to an entity
    PointLightComponent
);
handle!(
    /// World-space UI panel
    UiPanel
);
handle!(
    /// Text style owned by a panel; one style renders one string
    GlyphStyle
);

impl Entity {
    /// Transform of this entity, created by the host if missing
    pub fn transform<H: HostApi + ?Sized>(self, host: &mut H) -> TransformComponent {
        host.get_transform(self)
    }

    /// Point light of this entity, created by the host if missing
    pub fn point_light<H: HostApi + ?Sized>(self, host: &mut H) -> PointLightComponent {
        host.get_point_light(self)
    }

    pub fn add_point_light<H: HostApi + ?Sized>(self, host: &mut H) -> PointLightComponent {
        host.add_point_light(self)
    }

    pub fn spawn_child_at<H: HostApi + ?Sized>(self, host: &mut H, position: Vec3) -> Entity {
        host.spawn_child_at(self, position.x, position.y, position.z)
    }

    pub fn spawn_scripted_child_at<H: HostApi + ?Sized>(
        self,
        host: &mut H,
        script_impl: &str,
        position: Vec3,
    ) -> Entity {
        host.spawn_scripted_child_at(self, script_impl, position.x, position.y, position.z)
    }
}

impl TransformComponent {
    pub fn position<H: HostApi + ?Sized>(self, host: &H) -> Vec3 {
        Vec3::new(
            host.transform_get_x(self),
            host.transform_get_y(self),
            host.transform_get_z(self),
        )
    }

    pub fn set_position<H: HostApi + ?Sized>(self, host: &mut H, position: Vec3) {
        host.transform_set_position(self, position.x, position.y, position.z);
    }

    pub fn rotation<H: HostApi + ?Sized>(self, host: &H) -> Quat {
        Quat::from(host.transform_get_rotation(self))
    }

    pub fn set_rotation<H: HostApi + ?Sized>(self, host: &mut H, rotation: Quat) {
        host.transform_set_rotation(self, rotation.w, rotation.x, rotation.y, rotation.z);
    }
}

impl PointLightComponent {
    /// Set the light intensity; alpha is ignored
    pub fn set_intensity<H: HostApi + ?Sized>(self, host: &mut H, color: Color) {
        host.point_light_set_intensity(self, color.r, color.g, color.b);
    }
}

impl UiPanel {
    pub fn size<H: HostApi + ?Sized>(self, host: &H) -> Vec2 {
        Vec2::new(host.panel_get_width(self), host.panel_get_height(self))
    }

    pub fn set_size<H: HostApi + ?Sized>(self, host: &mut H, size: Vec2) {
        host.panel_set_size(self, size.x, size.y);
    }

    pub fn set_color<H: HostApi + ?Sized>(self, host: &mut H, color: Color) {
        host.panel_set_color(self, color.r, color.g, color.b, color.a);
    }

    pub fn create_glyph_style<H: HostApi + ?Sized>(self, host: &mut H) -> GlyphStyle {
        host.panel_create_glyph_style(self)
    }

    pub fn draw_circle<H: HostApi + ?Sized>(self, host: &mut H, center: Vec2, radius: f64, color: Color) {
        host.panel_draw_circle(self, center.x, center.y, radius, color.r, color.g, color.b, color.a);
    }
}

impl GlyphStyle {
    pub fn set_text<H: HostApi + ?Sized>(self, host: &mut H, text: &str) {
        host.glyph_set_text(self, text);
    }

    pub fn set_color<H: HostApi + ?Sized>(self, host: &mut H, color: Color) {
        host.glyph_set_color(self, color.r, color.g, color.b, color.a);
    }

    pub fn set_offset<H: HostApi + ?Sized>(self, host: &mut H, offset: Vec2) {
        host.glyph_set_offset(self, offset.x, offset.y);
    }
}
