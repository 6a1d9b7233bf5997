//! Starting kit every hero carries out of town

use crate::hero::Item;

pub const BASE_KIT: &[Item] = &[
    Item::new("backpack", 56),
    Item::new("tinderbox", 4),
    Item::new("torch", 8),
    Item::new("rations", 4),
    Item::new("water skein (empty)", 4),
    Item::new("small belt pouch", 2),
    Item::new("leather boots", 32),
    Item::new("belt", 2),
    Item::new("breeches", 4),
    Item::new("shirt", 4),
    Item::new("cloak", 16),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_kit_weighs_seventeen_pounds() {
        assert_eq!(BASE_KIT.len(), 11);
        let gpw: u32 = BASE_KIT.iter().map(|i| i.weight).sum();
        assert_eq!(gpw, 136);
    }
}
