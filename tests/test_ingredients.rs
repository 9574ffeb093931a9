use fetch_meal::{extract_ingredients, Ingredient};

fn names(raw: Option<&str>) -> Vec<String> {
    extract_ingredients(raw).into_iter().map(|i| i.name).collect()
}

#[test]
fn test_mixed_spacing_example() {
    let expected: Vec<Ingredient> = ["Flour", "Sugar", "Eggs"]
        .iter()
        .map(|name| Ingredient {
            name: name.to_string(),
            measurement: String::new(),
        })
        .collect();

    assert_eq!(extract_ingredients(Some("Flour, Sugar ,Eggs")), expected);
}

#[test]
fn test_absent_input() {
    assert!(extract_ingredients(None).is_empty());
}

#[test]
fn test_extra_whitespace_does_not_change_names() {
    let cases = [
        "Flour,Sugar,Eggs",
        "Plain Flour,Caster Sugar,Butter,Braeburn Apples",
        "Condensed Milk,Egg Yolks,Lime,Digestive Biscuits",
        "Milk,,Honey,",
        "single",
    ];

    for raw in cases {
        let padded: String = raw
            .split(',')
            .map(|piece| format!(" \n\t{}  \r\n", piece))
            .collect::<Vec<_>>()
            .join(",");

        assert_eq!(names(Some(raw)), names(Some(&padded)), "case {raw:?}");
    }
}

#[test]
fn test_empty_string_gives_one_empty_ingredient() {
    assert_eq!(names(Some("")), vec![String::new()]);
}

#[test]
fn test_trailing_comma_kept() {
    assert_eq!(names(Some("Cream, Sugar,")), vec!["Cream", "Sugar", ""]);
}

#[test]
fn test_measurement_always_empty() {
    let ingredients = extract_ingredients(Some("200g Flour, 2 Eggs"));
    assert!(ingredients.iter().all(|i| i.measurement.is_empty()));
    assert_eq!(ingredients[0].name, "200g Flour");
}
