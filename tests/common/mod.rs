#![allow(dead_code)]

use poll_intake::FormFields;

/// Every required scalar field of the intake form, with plausible values.
pub fn scalar_pairs() -> Vec<(String, String)> {
    let mut pairs: Vec<(String, String)> = [
        ("reg_idx", "1024"),
        ("elect_category", "local"),
        ("elect_area", "Busan"),
        ("elect_name", "Busan Mayor"),
        ("client_name", "Busan Daily"),
        ("subject", "Korea Research"),
        ("cosubject", ""),
        ("poll_area", "Busan"),
        ("poll_day", "2"),
        ("poll_target", "adults"),
        ("sample_frame", "virtual mobile numbers"),
        ("sample_size", "20000"),
        ("sample_method", "random"),
        ("mobile_ratio", "90"),
        ("sample_R", "150"),
        ("sample_I", "800"),
        ("sample_sum", "6000"),
        ("contact_ratio", "15.8"),
        ("response_ratio", "84.2"),
        ("weight1_calc", "cell"),
        ("weight1_apply", "rim"),
        ("trust", "95"),
        ("error", "3.5"),
        ("publish_media", "newspaper"),
        ("publisher", "Busan Daily"),
        ("publish_date", "2024-01-05T07:00"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    let counts = [
        ("whole", 800, 800),
        ("man", 390, 395),
        ("woman", 410, 405),
        ("_20", 110, 120),
        ("_30", 130, 125),
        ("_40", 160, 150),
        ("_50", 180, 170),
        ("_60", 220, 235),
    ];
    for (key, orig, weight) in counts {
        pairs.push((format!("{}_orig", key), orig.to_string()));
        pairs.push((format!("{}_weight", key), weight.to_string()));
    }
    pairs
}

pub fn form_with(extra: &[(&str, &str)]) -> FormFields {
    let mut pairs = scalar_pairs();
    pairs.extend(extra.iter().map(|(k, v)| (k.to_string(), v.to_string())));
    FormFields::from_pairs(pairs)
}

pub fn form_without(field: &str, extra: &[(&str, &str)]) -> FormFields {
    let mut pairs = scalar_pairs();
    pairs.retain(|(k, _)| k != field);
    pairs.extend(extra.iter().map(|(k, v)| (k.to_string(), v.to_string())));
    FormFields::from_pairs(pairs)
}

/// `application/x-www-form-urlencoded` body for the given pairs. Only the
/// characters the fixtures use are escaped.
pub fn urlencode(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", escape(k), escape(v)))
        .collect::<Vec<_>>()
        .join("&")
}

fn escape(s: &str) -> String {
    s.replace('%', "%25")
        .replace('&', "%26")
        .replace('=', "%3D")
        .replace('+', "%2B")
        .replace(':', "%3A")
        .replace(' ', "+")
}
