//! Shared wine-catalogue fixture.
//!
//! Mirrors the live taxonomy the observed title behavior comes from: a
//! neuter rubric "вино", a modifier attribute "tsvet" (color) whose options
//! carry gender variants, a head-candidate attribute "tip" (wine type) with
//! masculine noun options, and a nested "region" tree.

use std::collections::BTreeMap;

use vitrina::{
    Attribute, AttributesGroup, FilterOption, Gender, GenderVariants, RenderContext, Rubric,
    TranslationMap,
};

pub fn ctx() -> RenderContext {
    RenderContext::builder()
        .locale("ru")
        .default_locale("ru")
        .build()
}

pub fn segs(list: &[&str]) -> Vec<String> {
    list.iter().copied().map(String::from).collect()
}

pub fn wine_rubric() -> Rubric {
    Rubric::builder()
        .slug("vino")
        .name(TranslationMap::of("ru", "вино").with("en", "wine"))
        .gender(Gender::Neuter)
        .title_template("Купить {catalogue}")
        .attributes_groups(vec![
            AttributesGroup::builder()
                .name(TranslationMap::of("ru", "Характеристики"))
                .attributes(vec![
                    color_attribute(),
                    type_attribute(),
                    region_attribute(),
                ])
                .build(),
        ])
        .build()
}

pub fn noun_option(slug: &str, name: &str, gender: Gender) -> FilterOption {
    FilterOption::builder()
        .slug(slug)
        .name(TranslationMap::of("ru", name))
        .gender(gender)
        .build()
}

fn color_attribute() -> Attribute {
    Attribute::builder()
        .slug("tsvet")
        .name(TranslationMap::of("ru", "Цвет"))
        .options(vec![
            color_option("beloe", "белое", "белый", "белая"),
            color_option("krasnoe", "красное", "красный", "красная"),
        ])
        .build()
}

fn color_option(slug: &str, neuter: &str, masculine: &str, feminine: &str) -> FilterOption {
    let forms = GenderVariants {
        masculine: Some(masculine.to_string()),
        feminine: Some(feminine.to_string()),
        neuter: Some(neuter.to_string()),
    };
    FilterOption::builder()
        .slug(slug)
        .name(TranslationMap::of("ru", neuter))
        .gender(Gender::Neuter)
        .variants(BTreeMap::from([("ru".to_string(), forms)]))
        .build()
}

fn type_attribute() -> Attribute {
    Attribute::builder()
        .slug("tip")
        .name(TranslationMap::of("ru", "Тип вина"))
        .is_head_candidate(true)
        .options(vec![
            noun_option("portvein", "портвейн", Gender::Masculine),
            noun_option("heres", "херес", Gender::Masculine),
        ])
        .build()
}

fn region_attribute() -> Attribute {
    Attribute::builder()
        .slug("region")
        .name(TranslationMap::of("ru", "Регион"))
        .options(vec![
            FilterOption::builder()
                .slug("francija")
                .name(TranslationMap::of("ru", "Франция"))
                .gender(Gender::Feminine)
                .children(vec![
                    noun_option("bordo", "Бордо", Gender::Neuter),
                    noun_option("burgundija", "Бургундия", Gender::Feminine),
                ])
                .build(),
        ])
        .build()
}
