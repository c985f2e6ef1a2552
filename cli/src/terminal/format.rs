use colored::*;

use netlog_core::stats::RttStatistics;

use crate::terminal::colors;

fn ms(value: f64) -> ColoredString {
    format!("{value:.3} ms").color(colors::TEXT_DEFAULT)
}

pub fn statistics_to_detail(stats: &RttStatistics) -> Vec<(String, ColoredString)> {
    let loss: ColoredString = if stats.nulls == 0 {
        stats.nulls.to_string().green()
    } else {
        stats.nulls.to_string().color(colors::NULL)
    };

    vec![
        ("Replies".to_string(), format!("{}/{}", stats.valid, stats.total).normal()),
        ("Nulls".to_string(), loss),
        ("Min".to_string(), ms(stats.min)),
        ("Median".to_string(), ms(stats.median)),
        ("Mean".to_string(), ms(stats.mean)),
        ("Max".to_string(), ms(stats.max)),
    ]
}
