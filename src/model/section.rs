use super::catalog::REAL_DN;
use super::lenient;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Piped water system of a riser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum System {
    /// Cold water supply (В1).
    V1,
    /// Hot water supply (Т3).
    T3,
    /// Hot water recirculation (Т4).
    T4,
}

impl System {
    pub const ALL: [System; 3] = [System::V1, System::T3, System::T4];

    /// Estimate list the system is billed under. Recirculation travels with hot supply.
    #[must_use]
    pub fn estimate_system(self) -> EstimateSystem {
        match self {
            System::V1 => EstimateSystem::Cold,
            System::T3 | System::T4 => EstimateSystem::Hot,
        }
    }

    /// Cyrillic designation used on drawings.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            System::V1 => "В1",
            System::T3 => "Т3",
            System::T4 => "Т4",
        }
    }
}

impl fmt::Display for System {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            System::V1 => "V1",
            System::T3 => "T3",
            System::T4 => "T4",
        };
        f.write_str(code)
    }
}

/// The two estimate lists every section is split into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EstimateSystem {
    Cold,
    Hot,
}

impl EstimateSystem {
    pub const ALL: [EstimateSystem; 2] = [EstimateSystem::Cold, EstimateSystem::Hot];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            EstimateSystem::Cold => "Система холодного водоснабжения В1",
            EstimateSystem::Hot => "Система горячего водоснабжения Т3, Т4",
        }
    }
}

/// Metering-unit album a zone is equipped with.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum AlbumType {
    #[default]
    Collector,
    CollectorPreApt,
    PreApt,
}

impl AlbumType {
    pub const ALL: [AlbumType; 3] = [
        AlbumType::Collector,
        AlbumType::CollectorPreApt,
        AlbumType::PreApt,
    ];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            AlbumType::Collector => "collector",
            AlbumType::CollectorPreApt => "collector_pre_apt",
            AlbumType::PreApt => "pre_apt",
        }
    }
}

/// Riser diameters in mm per system; 0 means the system is not piped in the zone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diameters {
    #[serde(rename = "V1", default, deserialize_with = "lenient::uint")]
    pub v1: u32,
    #[serde(rename = "T3", default, deserialize_with = "lenient::uint")]
    pub t3: u32,
    #[serde(rename = "T4", default, deserialize_with = "lenient::uint")]
    pub t4: u32,
}

impl Diameters {
    #[must_use]
    pub const fn new(v1: u32, t3: u32, t4: u32) -> Self {
        Self { v1, t3, t4 }
    }

    #[must_use]
    pub fn get(&self, system: System) -> u32 {
        match system {
            System::V1 => self.v1,
            System::T3 => self.t3,
            System::T4 => self.t4,
        }
    }

    pub fn set(&mut self, system: System, dn: u32) {
        match system {
            System::V1 => self.v1 = dn,
            System::T3 => self.t3 = dn,
            System::T4 => self.t4 = dn,
        }
    }

    /// Systems that are actually piped, in V1, T3, T4 order.
    pub fn piped(&self) -> impl Iterator<Item = (System, u32)> + '_ {
        System::ALL
            .into_iter()
            .map(|sys| (sys, self.get(sys)))
            .filter(|(_, dia)| *dia > 0)
    }
}

impl fmt::Display for Diameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mm = |d: u32| {
            if d > 0 {
                format!("{d} мм")
            } else {
                "—".to_string()
            }
        };
        write!(
            f,
            "В1 {}/Т3 {}/Т4 {}",
            mm(self.v1),
            mm(self.t3),
            mm(self.t4)
        )
    }
}

/// Rental metering units on the first floor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rent {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default, deserialize_with = "lenient::uint")]
    pub qty: u32,
}

/// Allowed branch-pipe diameters for corridor runs.
pub const MOP_DIAMETERS: [u32; 5] = [16, 20, 25, 32, 40];

/// Horizontal corridor (MOP) branch-run parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mop {
    /// Corridor length, m.
    #[serde(rename = "L", default, deserialize_with = "lenient::float")]
    pub length: f64,
    /// Collector position along the corridor: 0 and 1 are the ends, 0.5 the middle.
    #[serde(rename = "r", default = "Mop::default_position", deserialize_with = "lenient::float")]
    pub position: f64,
    #[serde(default = "Mop::default_dn", deserialize_with = "lenient::uint")]
    pub dn: u32,
}

impl Mop {
    fn default_position() -> f64 {
        0.5
    }

    fn default_dn() -> u32 {
        20
    }

    /// Accepts only the three supported collector positions.
    pub fn set_position(&mut self, r: f64) -> bool {
        if [0.0, 0.5, 1.0].contains(&r) {
            self.position = r;
            true
        } else {
            false
        }
    }

    pub fn set_dn(&mut self, dn: u32) -> bool {
        if MOP_DIAMETERS.contains(&dn) {
            self.dn = dn;
            true
        } else {
            false
        }
    }

    pub fn set_length(&mut self, length: f64) {
        self.length = if length.is_finite() { length.max(0.0) } else { 0.0 };
    }

    /// Branch diameter, falling back to 20 when unset.
    #[must_use]
    pub fn dn_or_default(&self) -> u32 {
        if self.dn > 0 {
            self.dn
        } else {
            Self::default_dn()
        }
    }
}

impl Default for Mop {
    fn default() -> Self {
        Self {
            length: 30.0,
            position: 0.5,
            dn: 20,
        }
    }
}

/// A contiguous floor range within a section sharing riser count and diameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    #[serde(default)]
    pub name: String,
    /// Top floor of the zone, inclusive.
    #[serde(default, deserialize_with = "lenient::uint")]
    pub to: u32,
    #[serde(default, deserialize_with = "lenient::uint")]
    pub risers: u32,
    #[serde(default)]
    pub fixed_d: Diameters,
    #[serde(default)]
    pub album_type: AlbumType,
    #[serde(default)]
    pub locked: bool,
}

impl Zone {
    #[must_use]
    pub fn new(name: impl Into<String>, to: u32, risers: u32, fixed_d: Diameters) -> Self {
        Self {
            name: name.into(),
            to,
            risers,
            fixed_d,
            album_type: AlbumType::Collector,
            locked: false,
        }
    }

    #[must_use]
    pub fn with_album(mut self, album_type: AlbumType) -> Self {
        self.album_type = album_type;
        self
    }

    /// Riser count per floor, never below one.
    #[must_use]
    pub fn risers_per_floor(&self) -> u32 {
        self.risers.max(1)
    }

    /// Sets a system diameter. Non-standard sizes fall back to 32.
    ///
    /// With `cascade`, V1 also drives T3, and T3 drives T4 one table step lower.
    pub fn set_diameter(&mut self, system: System, dn: u32, cascade: bool) -> bool {
        if self.locked {
            return false;
        }
        let dn = if REAL_DN.contains(&dn) { dn } else { 32 };
        self.fixed_d.set(system, dn);

        if cascade && matches!(system, System::V1 | System::T3) {
            if system == System::V1 {
                self.fixed_d.t3 = dn;
            }
            let idx = REAL_DN.iter().position(|d| *d == dn).unwrap_or(0);
            self.fixed_d.t4 = REAL_DN[idx.saturating_sub(1)];
        }
        true
    }

    pub fn set_risers(&mut self, risers: u32) -> bool {
        if self.locked {
            return false;
        }
        self.risers = risers.max(1);
        true
    }
}

/// One building (corpus) of the project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    #[serde(default, deserialize_with = "lenient::uint")]
    pub floors: u32,
    #[serde(default)]
    pub floors_locked: bool,
    /// Apartments per floor; floor 1 is reserved for rental units.
    #[serde(default, deserialize_with = "lenient::floor_map")]
    pub apts: BTreeMap<u32, u32>,
    #[serde(default)]
    pub rent: Rent,
    #[serde(default)]
    pub zones: Vec<Zone>,
    #[serde(default)]
    pub mop: Mop,
}

impl Default for Section {
    fn default() -> Self {
        Self {
            floors: 12,
            floors_locked: false,
            apts: BTreeMap::new(),
            rent: Rent {
                enabled: false,
                qty: 1,
            },
            zones: vec![
                Zone::new("Зона 1", 6, 2, Diameters::new(32, 32, 32)),
                Zone::new("Зона 2", 12, 3, Diameters::new(40, 40, 40))
                    .with_album(AlbumType::CollectorPreApt),
            ],
            mop: Mop::default(),
        }
    }
}

impl Section {
    /// An empty section with the given floor count and no zones.
    #[must_use]
    pub fn with_floors(floors: u32) -> Self {
        Self {
            floors,
            zones: Vec::new(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn apartments_on(&self, floor: u32) -> u32 {
        self.apts.get(&floor).copied().unwrap_or(0)
    }

    /// Residential apartments, floors 2 up to the section height.
    #[must_use]
    pub fn apartment_count(&self) -> u32 {
        if self.floors < 2 {
            return 0;
        }
        self.apts
            .range(2..=self.floors)
            .map(|(_, count)| *count)
            .sum()
    }

    /// Rental metering units, zero when rent is disabled.
    #[must_use]
    pub fn rental_units(&self) -> u32 {
        if self.rent.enabled {
            self.rent.qty
        } else {
            0
        }
    }

    /// Changes the floor count, dropping apartments above it and clamping zone tops.
    pub fn set_floors(&mut self, floors: u32) -> bool {
        if self.floors_locked {
            return false;
        }
        self.floors = floors.max(1);
        let top = self.floors;
        self.apts.retain(|floor, _| *floor <= top);
        for zone in &mut self.zones {
            zone.to = zone.to.min(top);
        }
        true
    }

    /// Fills floors `from..=to` with `qty` apartments. Returns the range actually filled.
    pub fn autofill_apartments(&mut self, from: u32, to: u32, qty: u32) -> (u32, u32) {
        let mut from = from.max(2);
        let mut to = to.max(from);
        from = from.min(self.floors);
        to = to.min(self.floors);
        for floor in from..=to {
            self.apts.insert(floor, qty);
        }
        (from, to)
    }

    /// Appends a zone three floors above the last one.
    pub fn add_zone(&mut self) {
        let last_to = self.zones.last().map_or(0, |z| z.to);
        let to = self.floors.min((last_to + 3).max(1));
        let name = format!("Зона {}", self.zones.len() + 1);
        self.zones
            .push(Zone::new(name, to, 2, Diameters::new(32, 32, 32)));
    }

    /// Sets a zone's top floor, clamped into `1..=floors`.
    pub fn set_zone_top(&mut self, zone_index: usize, to: u32) -> bool {
        let floors = self.floors;
        match self.zones.get_mut(zone_index) {
            Some(zone) if !zone.locked => {
                zone.to = to.clamp(1, floors.max(1));
                true
            }
            _ => false,
        }
    }
}
