use std::collections::HashSet;
use std::fmt;

use crate::*;

/// Validation error for malformed or missing references in a MapDef.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    DuplicateAreaId { id: AreaId },
    DuplicateDirection { area: AreaId, direction: String },
    DanglingExit { area: AreaId, direction: String, to: AreaId },
    MissingArea { id: AreaId, context: &'static str },
    InvalidValue { context: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateAreaId { id } => {
                write!(f, "duplicate area id {id}")
            },
            ValidationError::DuplicateDirection { area, direction } => {
                write!(f, "area {area} declares direction '{direction}' more than once")
            },
            ValidationError::DanglingExit { area, direction, to } => {
                write!(f, "area {area} exit '{direction}' leads to unknown area {to}")
            },
            ValidationError::MissingArea { id, context } => {
                write!(f, "missing area {id} ({context})")
            },
            ValidationError::InvalidValue { context } => {
                write!(f, "invalid value ({context})")
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate cross-references and basic invariants in a MapDef.
///
/// ```
/// use scurry_data::{AreaDef, GameDef, MapDef, validate_map};
///
/// let map = MapDef {
///     game: GameDef {
///         title: "Demo".into(),
///         start_area: 1,
///         end_area: 1,
///         start_message: "Begin.".into(),
///         death_message: "End.".into(),
///     },
///     areas: vec![AreaDef {
///         id: 1,
///         description: "A quad.".into(),
///         initial_threat: 0,
///         item: Default::default(),
///         exits: Vec::new(),
///     }],
/// };
/// assert!(validate_map(&map).is_empty());
/// ```
pub fn validate_map(map: &MapDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if map.areas.is_empty() {
        errors.push(ValidationError::InvalidValue {
            context: "map contains no areas".to_string(),
        });
    }

    let mut areas = HashSet::new();
    for area in &map.areas {
        if !areas.insert(area.id) {
            errors.push(ValidationError::DuplicateAreaId { id: area.id });
        }
    }

    check_ref(map.game.start_area, &areas, "game start area", &mut errors);
    check_ref(map.game.end_area, &areas, "game end area", &mut errors);

    for area in &map.areas {
        let mut directions = HashSet::new();
        for exit in &area.exits {
            if !directions.insert(exit.direction.as_str()) {
                errors.push(ValidationError::DuplicateDirection {
                    area: area.id,
                    direction: exit.direction.clone(),
                });
            }
            if !areas.contains(&exit.to) {
                errors.push(ValidationError::DanglingExit {
                    area: area.id,
                    direction: exit.direction.clone(),
                    to: exit.to,
                });
            }
        }
    }

    errors
}

fn check_ref(id: AreaId, areas: &HashSet<AreaId>, context: &'static str, errors: &mut Vec<ValidationError>) {
    if !areas.contains(&id) {
        errors.push(ValidationError::MissingArea { id, context });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area(id: AreaId) -> AreaDef {
        AreaDef {
            id,
            description: format!("Area {id}"),
            initial_threat: 0,
            item: ItemKind::None,
            exits: Vec::new(),
        }
    }

    fn base_map() -> MapDef {
        MapDef {
            game: GameDef {
                title: "Demo".into(),
                start_area: 1,
                end_area: 2,
                start_message: "Begin.".into(),
                death_message: "End.".into(),
            },
            areas: vec![area(1), area(2)],
        }
    }

    #[test]
    fn valid_map_passes() {
        assert!(validate_map(&base_map()).is_empty());
    }

    #[test]
    fn duplicate_area_ids_are_reported() {
        let mut map = base_map();
        map.areas.push(area(1));

        let errors = validate_map(&map);
        assert!(
            errors
                .iter()
                .any(|err| matches!(err, ValidationError::DuplicateAreaId { id } if *id == 1))
        );
    }

    #[test]
    fn dangling_exits_are_reported() {
        let mut map = base_map();
        map.areas[0].exits.push(ExitDef {
            direction: "north".into(),
            to: 99,
        });

        let errors = validate_map(&map);
        assert!(errors.iter().any(
            |err| matches!(err, ValidationError::DanglingExit { area, to, .. } if *area == 1 && *to == 99)
        ));
    }

    #[test]
    fn duplicate_directions_are_reported() {
        let mut map = base_map();
        map.areas[0].exits.push(ExitDef {
            direction: "north".into(),
            to: 2,
        });
        map.areas[0].exits.push(ExitDef {
            direction: "north".into(),
            to: 2,
        });

        let errors = validate_map(&map);
        assert!(errors.iter().any(|err| {
            matches!(err, ValidationError::DuplicateDirection { area, direction } if *area == 1 && direction == "north")
        }));
    }

    #[test]
    fn unknown_start_and_end_areas_are_reported() {
        let mut map = base_map();
        map.game.start_area = 7;
        map.game.end_area = 8;

        let errors = validate_map(&map);
        assert!(
            errors
                .iter()
                .any(|err| matches!(err, ValidationError::MissingArea { id: 7, .. }))
        );
        assert!(
            errors
                .iter()
                .any(|err| matches!(err, ValidationError::MissingArea { id: 8, .. }))
        );
    }

    #[test]
    fn empty_map_is_reported() {
        let map = MapDef::default();
        let errors = validate_map(&map);
        assert!(
            errors
                .iter()
                .any(|err| matches!(err, ValidationError::InvalidValue { .. }))
        );
    }
}
