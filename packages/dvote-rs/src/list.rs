use crate::core::ContractError;

fn out_of_range(index: u32, len: usize) -> ContractError {
    ContractError::generic_err(format!(
        "Index {index} is out of range for a list of {len} items"
    ))
}

pub fn get_at<T>(items: &[T], index: u32) -> Result<&T, ContractError> {
    items
        .get(index as usize)
        .ok_or_else(|| out_of_range(index, items.len()))
}

pub fn set_at<T>(items: &mut [T], index: u32, value: T) -> Result<(), ContractError> {
    let len = items.len();
    let slot = items
        .get_mut(index as usize)
        .ok_or_else(|| out_of_range(index, len))?;
    *slot = value;
    Ok(())
}

/// Removes the item at `index` by moving the last item into its slot, so the
/// order of the remaining items is not preserved. When `expected` is given,
/// the item at `index` must equal it.
pub fn swap_remove_at<T: PartialEq>(
    items: &mut Vec<T>,
    index: u32,
    expected: Option<&T>,
) -> Result<T, ContractError> {
    let current = get_at(items, index)?;

    if let Some(expected) = expected {
        if current != expected {
            return Err(ContractError::generic_err(format!(
                "Item at index {index} does not match the given value"
            )));
        }
    }

    Ok(items.swap_remove(index as usize))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    fn letters() -> Vec<String> {
        ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn get_at_returns_item() {
        assert_eq!(get_at(&letters(), 2).unwrap(), "c");
    }

    #[test]
    fn get_at_fails_out_of_range() {
        assert_eq!(
            get_at(&letters(), 4).unwrap_err().to_string(),
            "Generic error: Index 4 is out of range for a list of 4 items"
        );
    }

    #[test]
    fn set_at_overwrites_item() {
        let mut items = letters();
        set_at(&mut items, 1, "z".to_string()).unwrap();
        assert_eq!(items, vec!["a", "z", "c", "d"]);
    }

    #[test]
    fn set_at_fails_out_of_range() {
        let mut items: Vec<String> = vec![];
        assert!(set_at(&mut items, 0, "z".to_string()).is_err());
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(2)]
    #[case(3)]
    fn swap_remove_keeps_remaining_items(#[case] index: u32) {
        let mut items = letters();
        let removed = swap_remove_at(&mut items, index, None).unwrap();

        let mut expected = letters().into_iter().collect::<HashSet<_>>();
        expected.remove(&removed);

        assert_eq!(items.len(), 3);
        assert_eq!(items.into_iter().collect::<HashSet<_>>(), expected);
    }

    #[test]
    fn swap_remove_moves_last_item_into_slot() {
        let mut items = letters();
        swap_remove_at(&mut items, 0, None).unwrap();
        assert_eq!(items, vec!["d", "b", "c"]);
    }

    #[test]
    fn swap_remove_checks_expected_value() {
        let mut items = letters();

        assert_eq!(
            swap_remove_at(&mut items, 1, Some(&"c".to_string()))
                .unwrap_err()
                .to_string(),
            "Generic error: Item at index 1 does not match the given value"
        );
        assert_eq!(items, letters());

        assert_eq!(
            swap_remove_at(&mut items, 1, Some(&"b".to_string())).unwrap(),
            "b"
        );
    }
}
