use bevy::prelude::*;

use crate::camera::CameraMode;
use crate::camera::CameraRig;
use crate::camera::HoveredStar;
use crate::catalog::Star;
use crate::catalog::StarCatalog;
use crate::scene::StarTint;

const HUD_FONT_SIZE: f32 = 14.0;
const HUD_MARGIN: f32 = 16.0;

const CONTROLS: &str = "\
Flight Controls:
- F: Toggle flight / orbit
- WASD / Arrow Keys: Move
- Q/Space: Up - E/Ctrl: Down
- Hold Shift: Accelerate (10x speed)
- Mouse drag: Look around
- Scroll: Zoom
- R: Regenerate stars";

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_hud)
            .add_systems(Update, (update_status, update_star_details));
    }
}

#[derive(Component)]
struct StatusText;

#[derive(Component)]
struct StarDetailsText;

fn hud_font() -> TextFont {
    TextFont {
        font_size: HUD_FONT_SIZE,
        ..default()
    }
}

#[derive(Clone, Copy)]
enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
}

fn panel(corner: Corner) -> Node {
    let margin = Val::Px(HUD_MARGIN);
    let mut node = Node {
        position_type: PositionType::Absolute,
        padding: UiRect::all(Val::Px(HUD_MARGIN * 0.5)),
        ..default()
    };
    match corner {
        Corner::TopLeft => {
            node.top = margin;
            node.left = margin;
        },
        Corner::TopRight => {
            node.top = margin;
            node.right = margin;
        },
        Corner::BottomRight => {
            node.bottom = margin;
            node.right = margin;
        },
    }
    node
}

fn spawn_hud(mut commands: Commands) {
    let backdrop = BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.5));

    commands.spawn((
        StatusText,
        Name::new("Status Panel"),
        Text::new(status_text(0, CameraMode::Orbit, 0.0, false)),
        hud_font(),
        TextColor(Color::WHITE),
        panel(Corner::TopLeft),
        backdrop,
    ));

    commands.spawn((
        StarDetailsText,
        Name::new("Star Details Panel"),
        Text::default(),
        hud_font(),
        TextColor(Color::WHITE),
        panel(Corner::TopRight),
        backdrop,
        Visibility::Hidden,
    ));

    commands
        .spawn((
            Name::new("Star Color Legend"),
            Text::new("Star Colors\n"),
            hud_font(),
            TextColor(Color::WHITE),
            panel(Corner::BottomRight),
            backdrop,
        ))
        .with_children(|legend| {
            for tint in StarTint::ALL {
                legend.spawn((
                    TextSpan::new(format!("* {}\n", tint.description())),
                    hud_font(),
                    TextColor(tint.color()),
                ));
            }
        });
}

fn update_status(
    catalog: Option<Res<StarCatalog>>,
    rigs: Query<&CameraRig>,
    mut texts: Query<&mut Text, With<StatusText>>,
) {
    let Ok(rig) = rigs.single() else {
        return;
    };

    let star_count = catalog.map_or(0, |catalog| catalog.len());
    let status = status_text(star_count, rig.mode, rig.speed(), rig.flight.boosting);
    for mut text in &mut texts {
        if text.0 != status {
            text.0.clone_from(&status);
        }
    }
}

fn update_star_details(
    hovered: Res<HoveredStar>,
    catalog: Option<Res<StarCatalog>>,
    mut panels: Query<(&mut Text, &mut Visibility), With<StarDetailsText>>,
) {
    let star = hovered
        .0
        .zip(catalog.as_deref())
        .and_then(|(index, catalog)| catalog.get(index));

    for (mut text, mut visibility) in &mut panels {
        match star {
            Some(star) => {
                let details = star_details(star);
                if text.0 != details {
                    text.0 = details;
                }
                visibility.set_if_neq(Visibility::Inherited);
            },
            None => {
                visibility.set_if_neq(Visibility::Hidden);
            },
        }
    }
}

pub fn status_text(star_count: usize, mode: CameraMode, speed: f32, boosting: bool) -> String {
    let boost = if boosting && mode == CameraMode::FreeFlight {
        " BOOST"
    } else {
        ""
    };
    format!(
        "Cosmos Star Catalog\nStars: {}\n{}\nSpeed: {speed:.1} units/s{boost}\n\n{CONTROLS}",
        group_thousands(star_count),
        mode.label(),
    )
}

/// One line per field the star actually has
pub fn star_details(star: &Star) -> String {
    let mut lines = vec![star.display_name()];
    if let Some(ra) = star.ra {
        lines.push(format!("RA: {ra:.2}h"));
    }
    if let Some(dec) = star.dec {
        lines.push(format!("Dec: {dec:.2}°"));
    }
    if let Some(magnitude) = star.magnitude {
        lines.push(format!("Magnitude: {magnitude:.2}"));
    }
    if let Some(color_index) = star.color_index {
        lines.push(format!("B-V Index: {color_index:.2}"));
    }
    if let Some(spectral_class) = &star.spectral_class {
        lines.push(format!("Spectral Class: {spectral_class}"));
    }
    if let Some(distance) = star.distance.filter(|distance| *distance > 0.0) {
        lines.push(format!("Distance: {distance:.1} pc"));
    }
    lines.join("\n")
}

fn group_thousands(count: usize) -> String {
    let digits = count.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StarId;

    #[test]
    fn details_list_only_present_fields() {
        let star = Star {
            id: Some(StarId::Number(42)),
            ra: Some(6.75),
            spectral_class: Some("A1V".to_string()),
            ..default()
        };

        assert_eq!(star_details(&star), "Star 42\nRA: 6.75h\nSpectral Class: A1V");
    }

    #[test]
    fn details_for_a_full_star() {
        let star = Star {
            name: Some("Sirius".to_string()),
            ra: Some(6.75),
            dec: Some(-16.72),
            magnitude: Some(-1.46),
            color_index: Some(0.0),
            distance: Some(2.64),
            spectral_class: Some("A1V".to_string()),
            ..default()
        };

        assert_eq!(
            star_details(&star),
            "Sirius\nRA: 6.75h\nDec: -16.72°\nMagnitude: -1.46\nB-V Index: 0.00\nSpectral Class: \
             A1V\nDistance: 2.6 pc"
        );
    }

    #[test]
    fn status_shows_mode_and_boost() {
        let orbit = status_text(110, CameraMode::Orbit, 0.0, true);
        assert!(orbit.contains("Stars: 110\nORBIT\nSpeed: 0.0 units/s\n"));

        let flying = status_text(1_234_567, CameraMode::FreeFlight, 49.96, true);
        assert!(flying.contains("Stars: 1,234,567\nFLYING\nSpeed: 50.0 units/s BOOST\n"));
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(110_000), "110,000");
    }
}
