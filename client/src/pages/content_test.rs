use super::*;

#[test]
fn exactly_one_plan_is_featured() {
    let featured: Vec<_> = PLANS.iter().filter(|p| p.featured).map(|p| p.name).collect();
    assert_eq!(featured, ["Priority Access"]);
    assert_eq!(plan_class(&PLANS[1]), "plan plan--featured");
    assert_eq!(plan_class(&PLANS[0]), "plan");
}

#[test]
fn plan_prices_match_published_rates() {
    let prices: Vec<_> = PLANS.iter().map(|p| (p.name, p.price, p.price_unit)).collect();
    assert_eq!(
        prices,
        [
            ("Day-Pass", "12%", " guest fee"),
            ("Priority Access", "$12.99", "/mo"),
            ("Preferred Landowner", "$9.99", "/mo"),
        ]
    );
}

#[test]
fn fee_copy_is_consistent_across_sections() {
    let fees_answer = FAQ.iter().find(|f| f.question == "What are the fees?").unwrap();
    assert!(fees_answer.answer.contains(GUEST_FEE));
    assert!(fees_answer.answer.contains("5% owner fee (min $2)"));
    assert!(FEATURES.iter().any(|c| c.text.contains(GUEST_FEE)));
}

#[test]
fn faq_questions_are_unique() {
    for (i, a) in FAQ.iter().enumerate() {
        assert!(FAQ.iter().skip(i + 1).all(|b| b.question != a.question));
    }
}

#[test]
fn mailto_prefixes_address() {
    assert_eq!(mailto(CONTACT_EMAIL), "mailto:hello@openacre.co");
}
