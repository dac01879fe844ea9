//! Rule-based scanner for numeric quantities and their units.
//!
//! Recognized number forms: integers, decimals, fractions (`1/2`), mixed
//! numbers (`1 1/2`), vulgar fraction glyphs, and the words one..twelve.
//! Units are matched against a static table of surface forms and reported
//! under their canonical name.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::domain::{DIMENSIONLESS, Quantity, scalar_multiplier};

/// Source of `(value, unit)` candidates found in free text.
pub trait QuantityParser {
    /// Returns every quantity found in `text`, in left-to-right order.
    fn parse(&self, text: &str) -> Vec<Quantity>;
}

static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
          (?P<num>\d+(?:\.\d+)?(?:/\d+)?)
        | (?P<glyph>[½¼¾⅓⅔⅛])
        | (?P<word>[^\W\d_]+)
        | (?P<sym>[%$€£])
        ",
    )
    .expect("quantity token pattern is valid")
});

/// Surface form → canonical unit name.
const UNIT_FORMS: &[(&str, &str)] = &[
    // mass
    ("mg", "milligram"),
    ("milligram", "milligram"),
    ("milligrams", "milligram"),
    ("g", "gram"),
    ("gr", "gram"),
    ("gram", "gram"),
    ("grams", "gram"),
    ("gramme", "gram"),
    ("grammes", "gram"),
    ("kg", "kilogram"),
    ("kgs", "kilogram"),
    ("kilo", "kilogram"),
    ("kilos", "kilogram"),
    ("kilogram", "kilogram"),
    ("kilograms", "kilogram"),
    ("lb", "pound"),
    ("lbs", "pound"),
    ("pound", "pound"),
    ("pounds", "pound"),
    ("oz", "ounce"),
    ("ounce", "ounce"),
    ("ounces", "ounce"),
    // volume
    ("ml", "millilitre"),
    ("millilitre", "millilitre"),
    ("millilitres", "millilitre"),
    ("milliliter", "millilitre"),
    ("milliliters", "millilitre"),
    ("cl", "centilitre"),
    ("dl", "decilitre"),
    ("l", "litre"),
    ("ltr", "litre"),
    ("litre", "litre"),
    ("litres", "litre"),
    ("liter", "litre"),
    ("liters", "litre"),
    ("fl oz", "fluid ounce"),
    ("fluid ounce", "fluid ounce"),
    ("fluid ounces", "fluid ounce"),
    ("tsp", "teaspoon"),
    ("teaspoon", "teaspoon"),
    ("teaspoons", "teaspoon"),
    ("tbsp", "tablespoon"),
    ("tablespoon", "tablespoon"),
    ("tablespoons", "tablespoon"),
    ("cup", "cup"),
    ("cups", "cup"),
    ("pt", "pint"),
    ("pint", "pint"),
    ("pints", "pint"),
    ("qt", "quart"),
    ("quart", "quart"),
    ("quarts", "quart"),
    ("gal", "gallon"),
    ("gallon", "gallon"),
    ("gallons", "gallon"),
    // length
    ("mm", "millimetre"),
    ("cm", "centimetre"),
    ("m", "metre"),
    ("metre", "metre"),
    ("metres", "metre"),
    ("meter", "metre"),
    ("meters", "metre"),
    ("inch", "inch"),
    ("inches", "inch"),
    ("ft", "foot"),
    ("foot", "foot"),
    ("feet", "foot"),
    ("yd", "yard"),
    ("yard", "yard"),
    ("yards", "yard"),
    // containers and pieces
    ("pack", "pack"),
    ("packs", "pack"),
    ("packet", "pack"),
    ("packets", "pack"),
    ("can", "can"),
    ("cans", "can"),
    ("tin", "can"),
    ("tins", "can"),
    ("bottle", "bottle"),
    ("bottles", "bottle"),
    ("box", "box"),
    ("boxes", "box"),
    ("bag", "bag"),
    ("bags", "bag"),
    ("jar", "jar"),
    ("jars", "jar"),
    ("carton", "carton"),
    ("cartons", "carton"),
    ("piece", "piece"),
    ("pieces", "piece"),
    ("pc", "piece"),
    ("pcs", "piece"),
    ("roll", "roll"),
    ("rolls", "roll"),
    ("loaf", "loaf"),
    ("loaves", "loaf"),
    ("slice", "slice"),
    ("slices", "slice"),
    ("bunch", "bunch"),
    ("bunches", "bunch"),
    ("clove", "clove"),
    ("cloves", "clove"),
    // scalar words
    ("pair", "pair"),
    ("pairs", "pair"),
    ("dozen", "dozen"),
    ("dozens", "dozen"),
    ("gross", "gross"),
    ("long hundred", "long hundred"),
    ("long hundreds", "long hundred"),
    ("great gross", "great gross"),
    // time
    ("sec", "second"),
    ("secs", "second"),
    ("second", "second"),
    ("seconds", "second"),
    ("min", "minute"),
    ("mins", "minute"),
    ("minute", "minute"),
    ("minutes", "minute"),
    ("h", "hour"),
    ("hr", "hour"),
    ("hrs", "hour"),
    ("hour", "hour"),
    ("hours", "hour"),
    ("day", "day"),
    ("days", "day"),
    ("wk", "week"),
    ("week", "week"),
    ("weeks", "week"),
    ("month", "month"),
    ("months", "month"),
    ("yr", "year"),
    ("yrs", "year"),
    ("year", "year"),
    ("years", "year"),
    // money
    ("dollar", "dollar"),
    ("dollars", "dollar"),
    ("usd", "dollar"),
    ("buck", "dollar"),
    ("bucks", "dollar"),
    ("cent", "cent"),
    ("cents", "cent"),
    ("euro", "euro"),
    ("euros", "euro"),
    ("eur", "euro"),
    ("gbp", "pound sterling"),
    // ratios and temperature
    ("percent", "percentage"),
    ("per cent", "percentage"),
    ("pct", "percentage"),
    ("degree", "degree"),
    ("degrees", "degree"),
    ("degree celsius", "degree celsius"),
    ("degrees celsius", "degree celsius"),
    ("degree fahrenheit", "degree fahrenheit"),
    ("degrees fahrenheit", "degree fahrenheit"),
];

static UNITS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| UNIT_FORMS.iter().copied().collect());

const NUMBER_WORDS: &[(&str, f64)] = &[
    ("one", 1.0),
    ("two", 2.0),
    ("three", 3.0),
    ("four", 4.0),
    ("five", 5.0),
    ("six", 6.0),
    ("seven", 7.0),
    ("eight", 8.0),
    ("nine", 9.0),
    ("ten", 10.0),
    ("eleven", 11.0),
    ("twelve", 12.0),
];

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number { value: f64, fraction: bool },
    Word(String),
    Symbol(char),
}

fn glyph_value(glyph: &str) -> Option<f64> {
    match glyph {
        "½" => Some(0.5),
        "¼" => Some(0.25),
        "¾" => Some(0.75),
        "⅓" => Some(1.0 / 3.0),
        "⅔" => Some(2.0 / 3.0),
        "⅛" => Some(0.125),
        _ => None,
    }
}

fn number_value(raw: &str) -> Option<Token> {
    match raw.split_once('/') {
        Some((num, den)) => {
            let num: f64 = num.parse().ok()?;
            let den: f64 = den.parse().ok()?;
            (den != 0.0).then_some(Token::Number {
                value: num / den,
                fraction: true,
            })
        }
        None => raw.parse().ok().map(|value| Token::Number {
            value,
            fraction: false,
        }),
    }
}

fn lex(text: &str) -> Vec<Token> {
    let lowered = text.to_lowercase();
    TOKEN_RE
        .captures_iter(&lowered)
        .filter_map(|caps| {
            if let Some(m) = caps.name("num") {
                number_value(m.as_str())
            } else if let Some(m) = caps.name("glyph") {
                glyph_value(m.as_str()).map(|value| Token::Number {
                    value,
                    fraction: true,
                })
            } else if let Some(m) = caps.name("word") {
                Some(Token::Word(m.as_str().to_string()))
            } else {
                caps.name("sym")
                    .and_then(|m| m.as_str().chars().next())
                    .map(Token::Symbol)
            }
        })
        .collect()
}

/// Looks up a unit starting at `start`, preferring two-word forms.
///
/// Returns the canonical unit, the number of tokens consumed, and the
/// matched surface form.
fn unit_at(tokens: &[Token], start: usize) -> Option<(&'static str, usize, &'static str)> {
    let word = |i: usize| match tokens.get(i) {
        Some(Token::Word(w)) => Some(w.as_str()),
        _ => None,
    };

    let first = word(start)?;
    if let Some(second) = word(start + 1) {
        let pair = format!("{first} {second}");
        if let Some((surface, unit)) = UNITS.get_key_value(pair.as_str()) {
            return Some((*unit, 2, *surface));
        }
    }
    UNITS
        .get_key_value(first)
        .map(|(surface, unit)| (*unit, 1, *surface))
}

fn currency_unit(symbol: char) -> Option<&'static str> {
    match symbol {
        '$' => Some("dollar"),
        '€' => Some("euro"),
        '£' => Some("pound sterling"),
        _ => None,
    }
}

/// Default [`QuantityParser`] driven by static unit and number-word tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitScanner;

impl UnitScanner {
    pub fn new() -> Self {
        Self
    }

    /// Reads an optional unit following a number at `next`.
    fn quantity_after(&self, value: f64, tokens: &[Token], next: usize) -> (Quantity, usize) {
        if let Some(Token::Symbol('%')) = tokens.get(next) {
            return (Quantity::new(value, "percentage"), 1);
        }
        match unit_at(tokens, next) {
            Some((unit, consumed, _)) => (Quantity::new(value, unit), consumed),
            None => (Quantity::dimensionless(value), 0),
        }
    }
}

impl QuantityParser for UnitScanner {
    fn parse(&self, text: &str) -> Vec<Quantity> {
        let tokens = lex(text);
        let mut found = Vec::new();
        let mut i = 0;

        while i < tokens.len() {
            match &tokens[i] {
                Token::Symbol(symbol) => {
                    if let (Some(unit), Some(Token::Number { value, .. })) =
                        (currency_unit(*symbol), tokens.get(i + 1))
                    {
                        found.push(Quantity::new(*value, unit));
                        i += 2;
                        continue;
                    }
                }
                Token::Number { value, fraction } => {
                    let mut value = *value;
                    let mut next = i + 1;
                    // "1 1/2": whole number followed by a fraction
                    if !fraction
                        && value.fract() == 0.0
                        && let Some(Token::Number {
                            value: part,
                            fraction: true,
                        }) = tokens.get(next)
                        && *part < 1.0
                    {
                        value += part;
                        next += 1;
                    }
                    let (quantity, consumed) = self.quantity_after(value, &tokens, next);
                    found.push(quantity);
                    i = next + consumed;
                    continue;
                }
                Token::Word(word) => {
                    let article = word == "a" || word == "an";
                    let number = NUMBER_WORDS
                        .iter()
                        .find(|(w, _)| *w == word.as_str())
                        .map(|(_, n)| *n)
                        .or(article.then_some(1.0));

                    if let Some(value) = number {
                        match unit_at(&tokens, i + 1) {
                            // articles only count before a spelled-out unit ("a pound", not "a g")
                            Some((unit, consumed, surface)) if !article || surface.len() > 2 => {
                                found.push(Quantity::new(value, unit));
                                i += 1 + consumed;
                                continue;
                            }
                            _ if !article => {
                                found.push(Quantity::dimensionless(value));
                                i += 1;
                                continue;
                            }
                            _ => {}
                        }
                    } else if let Some((unit, consumed, _)) = unit_at(&tokens, i)
                        && unit != DIMENSIONLESS
                        && scalar_multiplier(unit).is_some()
                    {
                        found.push(Quantity::new(1.0, unit));
                        i += consumed;
                        continue;
                    }
                }
            }
            i += 1;
        }

        found
    }
}
