use std::collections::BTreeMap;
use std::num::NonZeroU32;
use std::sync::Arc;

/// Immutable template shared by every mob created from it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MobClass {
    name: String,
    avatar: char,
    description: String,
    max_hp: NonZeroU32,
}

impl MobClass {
    pub fn new(
        name: impl Into<String>,
        avatar: char,
        description: impl Into<String>,
        max_hp: NonZeroU32,
    ) -> Self {
        Self {
            name: name.into(),
            avatar,
            description: description.into(),
            max_hp,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn avatar(&self) -> char {
        self.avatar
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn max_hp(&self) -> u32 {
        self.max_hp.get()
    }

    /// Creates a new mob of this class at full health.
    ///
    /// Instance names are not checked here; the [`crate::House`] enforces
    /// uniqueness when the mob is spawned.
    pub fn instantiate(self: &Arc<Self>, name: impl Into<String>) -> Mob {
        Mob {
            name: name.into(),
            class: Arc::clone(self),
            current_hp: self.max_hp.get(),
        }
    }
}

/// Catalog of mob classes keyed by class name.
///
/// Classes are stored once and handed out as `Arc`s, so every instance refers to
/// the same template.
#[derive(Clone, Debug, Default)]
pub struct MobCatalog {
    classes: BTreeMap<String, Arc<MobClass>>,
}

impl MobCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a class, returning the one it replaced (if any).
    pub fn insert(&mut self, class: MobClass) -> Option<Arc<MobClass>> {
        self.classes.insert(class.name.clone(), Arc::new(class))
    }

    pub fn get(&self, name: &str) -> Option<&Arc<MobClass>> {
        self.classes.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<MobClass>> {
        self.classes.values()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl FromIterator<MobClass> for MobCatalog {
    fn from_iter<I: IntoIterator<Item = MobClass>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for class in iter {
            catalog.insert(class);
        }
        catalog
    }
}

/// How healthy a mob looks, most healthy first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum HealthDescriptor {
    Healthy,
    #[strum(serialize = "slightly injured")]
    SlightlyInjured,
    Injured,
    #[strum(serialize = "badly injured")]
    BadlyInjured,
    #[strum(serialize = "nearly dead")]
    NearlyDead,
}

impl HealthDescriptor {
    /// Maps `current / maximum` onto the five bands.
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio > 0.99 {
            Self::Healthy
        } else if ratio > 0.8 {
            Self::SlightlyInjured
        } else if ratio > 0.6 {
            Self::Injured
        } else if ratio > 0.4 {
            Self::BadlyInjured
        } else {
            Self::NearlyDead
        }
    }
}

/// A live instance of a [`MobClass`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mob {
    name: String,
    class: Arc<MobClass>,
    current_hp: u32,
}

impl Mob {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn class(&self) -> &MobClass {
        &self.class
    }

    pub fn current_hp(&self) -> u32 {
        self.current_hp
    }

    /// Sets current hit points, clamped to the class maximum.
    pub fn set_hit_points(&mut self, hp: u32) {
        self.current_hp = hp.min(self.class.max_hp());
    }

    pub fn health(&self) -> HealthDescriptor {
        HealthDescriptor::from_ratio(f64::from(self.current_hp) / f64::from(self.class.max_hp()))
    }

    /// One-line status, e.g. `🦊 Dastardly Auger is here and looks healthy.`
    pub fn render(&self) -> String {
        format!(
            "{} {} is here and looks {}.",
            self.class.avatar,
            self.class.name,
            self.health()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(max_hp: u32) -> Arc<MobClass> {
        Arc::new(MobClass::new(
            "Test Class",
            'x',
            "Description!",
            NonZeroU32::new(max_hp).unwrap(),
        ))
    }

    #[test]
    fn instantiate_starts_at_full_health() {
        let mob = class(1).instantiate("larry");

        assert_eq!(mob.name(), "larry");
        assert_eq!(mob.current_hp(), 1);
        assert_eq!(mob.health(), HealthDescriptor::Healthy);
    }

    #[test]
    fn instances_share_their_class() {
        let class = class(10);
        let a = class.instantiate("a");
        let b = class.instantiate("b");

        assert!(std::ptr::eq(a.class(), b.class()));
        assert_eq!(Arc::strong_count(&class), 3);
    }

    #[test]
    fn health_bands_at_reference_ratios() {
        assert_eq!(HealthDescriptor::from_ratio(1.0), HealthDescriptor::Healthy);
        assert_eq!(
            HealthDescriptor::from_ratio(0.85),
            HealthDescriptor::SlightlyInjured
        );
        assert_eq!(HealthDescriptor::from_ratio(0.70), HealthDescriptor::Injured);
        assert_eq!(
            HealthDescriptor::from_ratio(0.50),
            HealthDescriptor::BadlyInjured
        );
        assert_eq!(
            HealthDescriptor::from_ratio(0.20),
            HealthDescriptor::NearlyDead
        );
    }

    #[test]
    fn band_edges_belong_to_the_lower_band() {
        let mut mob = class(100).instantiate("larry");
        let cases = [
            (100, HealthDescriptor::Healthy),
            (99, HealthDescriptor::SlightlyInjured),
            (81, HealthDescriptor::SlightlyInjured),
            (80, HealthDescriptor::Injured),
            (60, HealthDescriptor::BadlyInjured),
            (40, HealthDescriptor::NearlyDead),
            (0, HealthDescriptor::NearlyDead),
        ];

        for (hp, expected) in cases {
            mob.set_hit_points(hp);
            assert_eq!(mob.health(), expected, "hp = {hp}");
        }
    }

    #[test]
    fn hit_points_never_exceed_maximum() {
        let mut mob = class(5).instantiate("larry");
        mob.set_hit_points(50);
        assert_eq!(mob.current_hp(), 5);

        mob.set_hit_points(u32::MAX);
        assert_eq!(mob.current_hp(), mob.class().max_hp());
        assert_eq!(mob.health(), HealthDescriptor::Healthy);

        mob.set_hit_points(0);
        assert_eq!(mob.health(), HealthDescriptor::NearlyDead);
    }

    #[test]
    fn render_uses_avatar_class_and_health() {
        let mut mob = class(10).instantiate("larry");
        mob.set_hit_points(5);
        assert_eq!(mob.render(), "x Test Class is here and looks badly injured.");
    }

    #[test]
    fn catalog_overwrites_by_name() {
        let mut catalog = MobCatalog::new();
        catalog.insert(MobClass::new("Rat", 'r', "small", NonZeroU32::MIN));
        let replaced = catalog.insert(MobClass::new("Rat", 'R', "big", NonZeroU32::MIN));

        assert!(replaced.is_some());
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("Rat").unwrap().avatar(), 'R');
    }
}
