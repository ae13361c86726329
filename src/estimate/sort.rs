//! Fixed ordering of estimate lists.

use super::item::{EstimateItem, SortKey};
use super::names;
use std::collections::HashMap;

/// Priority of groups whose work item is not in [`WORK_ORDER`].
pub const OTHER_WORK_PRIORITY: u32 = 900;
/// Priority of groups made of materials only.
pub const NO_WORK_PRIORITY: u32 = 999;

/// Work name prefixes in estimate order.
const WORK_ORDER: [(&str, u32); 14] = [
    ("Монтаж трубопроводов из стальных оцинкованных труб", 1),
    (names::PEX_WORK, 2),
    ("Теплоизоляция трубопровода", 3),
    (names::SLEEVE_WORK, 4),
    (names::END_NODE_WORK, 5),
    ("Установка счётчиков воды", 6),
    ("Монтаж коллектора", 7),
    ("Монтаж водомерного узла", 8),
    (names::IVPT_WORK, 9),
    ("Установка кранов шаровых", 10),
    ("Монтаж компенсатора сильфонного диаметром до 50", 11),
    ("Монтаж компенсатора сильфонного диаметром до 100", 12),
    (names::SUPPORT_WORK, 13),
    (names::COMMISSIONING_WORK, 14),
];

#[must_use]
pub fn work_priority(item: &EstimateItem) -> u32 {
    if !item.is_work() {
        return NO_WORK_PRIORITY;
    }
    WORK_ORDER
        .iter()
        .find(|(prefix, priority)| {
            item.name.starts_with(prefix) && (*priority != 10 || item.name.contains("ИВПТ"))
        })
        .map_or(OTHER_WORK_PRIORITY, |(_, priority)| *priority)
}

/// Digits right after `pos`, skipping whitespace first when `skip_ws` is set.
fn number_at(chars: &[char], mut pos: usize, skip_ws: bool) -> Option<(u32, usize)> {
    if skip_ws {
        while chars.get(pos).is_some_and(|c| c.is_whitespace()) {
            pos += 1;
        }
    }
    let start = pos;
    while chars.get(pos).is_some_and(char::is_ascii_digit) {
        pos += 1;
    }
    if pos == start {
        return None;
    }
    let digits: String = chars[start..pos].iter().collect();
    digits.parse().ok().map(|n| (n, pos))
}

fn starts_with_at(chars: &[char], pos: usize, pattern: &str) -> bool {
    let mut i = pos;
    for p in pattern.chars() {
        if chars.get(i) != Some(&p) {
            return false;
        }
        i += 1;
    }
    true
}

/// Nominal diameter written in a line name: `Ду 15`, `Ø20`, or `до 50 мм`.
#[must_use]
pub fn diameter_from_name(name: &str) -> Option<u32> {
    let chars: Vec<char> = name.to_lowercase().chars().collect();
    let nominal = (0..chars.len()).find_map(|pos| {
        if starts_with_at(&chars, pos, "ду") {
            number_at(&chars, pos + 2, true).map(|(n, _)| n)
        } else if chars[pos] == 'ø' {
            number_at(&chars, pos + 1, false).map(|(n, _)| n)
        } else {
            None
        }
    });
    if nominal.is_some() {
        return nominal;
    }
    (0..chars.len()).find_map(|pos| {
        if !starts_with_at(&chars, pos, "до") {
            return None;
        }
        let (n, mut end) = number_at(&chars, pos + 2, true)?;
        while chars.get(end).is_some_and(|c| c.is_whitespace()) {
            end += 1;
        }
        starts_with_at(&chars, end, "мм").then_some(n)
    })
}

/// Groups items by sort key and orders the groups.
///
/// Groups keep the order of their first item, items inside a group are
/// ordered by `sort_order`. Groups are then ordered by work priority, by
/// diameter and finally by the key's text. Sorting is stable throughout.
#[must_use]
pub fn sort_items(items: Vec<EstimateItem>) -> Vec<EstimateItem> {
    let mut index: HashMap<SortKey, usize> = HashMap::new();
    let mut groups: Vec<(SortKey, Vec<EstimateItem>)> = Vec::new();
    for item in items {
        let slot = *index.entry(item.sort_key).or_insert_with(|| {
            groups.push((item.sort_key, Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(item);
    }

    let mut ranked: Vec<((u32, u32, String), Vec<EstimateItem>)> = groups
        .into_iter()
        .filter_map(|(key, mut group)| {
            group.sort_by_key(|item| item.sort_order);
            let lead = group.iter().find(|i| i.is_work()).or_else(|| group.first())?;
            let priority = work_priority(lead);
            let diameter = key
                .diameter()
                .or_else(|| diameter_from_name(&lead.name))
                .unwrap_or(0);
            Some(((priority, diameter, key.to_string()), group))
        })
        .collect();
    ranked.sort_by(|(a, _), (b, _)| a.cmp(b));
    ranked.into_iter().flat_map(|(_, group)| group).collect()
}
