//! Simplified Chinese catalog

pub const ENTRIES: &[(&str, &str)] = &[
    // Connectives
    ("every", "每"),
    ("and", "和"),
    ("at", "在"),
    ("on", "在"),
    ("in", "在"),
    ("list_separator", "、"),
    ("clause_separator", "，"),
    // Units
    ("second", "秒"),
    ("seconds", "秒"),
    ("minute", "分钟"),
    ("minutes", "分钟"),
    ("hour", "小时"),
    ("hours", "小时"),
    ("day", "日"),
    ("days", "日"),
    ("month", "月"),
    ("months", "个月"),
    ("year", "年"),
    ("years", "年"),
    // Templates
    ("unit_value", "{0}{unit}"),
    ("unit_value.hour", "{0}点"),
    ("unit_value.minute", "{0}分"),
    ("unit_value.second", "{0}秒"),
    ("from_x_to_y", "从{0}到{1}"),
    ("between_x_and_y", "在{0}和{1}之间"),
    ("every_x", "每{0}"),
    ("every_n_x", "每{0}{1}"),
    ("starting_with", "从{0}开始"),
    ("at_time", "在{0}"),
    ("every_n_hours_at_minute", "每{0}小时的第{1}分钟"),
    ("at_minute_of_every_hour", "每小时的第{0}分钟"),
    ("nth_of_every_month", "每月第{0}个{1}"),
    ("last_of_every_month", "每月最后一个{0}"),
    ("last_day_of_month", "每月最后一天"),
    ("last_weekday_of_month", "每月最后一个工作日"),
    ("nearest_weekday_to", "每月最接近{0}的工作日"),
    ("with_preposition", "{0}{1}"),
    ("list_last", "{0}{1}{2}"),
    // Ordinals
    ("ordinal.1", "一"),
    ("ordinal.2", "二"),
    ("ordinal.3", "三"),
    ("ordinal.4", "四"),
    ("ordinal.5", "五"),
    // Months
    ("month.january", "一月"),
    ("month.february", "二月"),
    ("month.march", "三月"),
    ("month.april", "四月"),
    ("month.may", "五月"),
    ("month.june", "六月"),
    ("month.july", "七月"),
    ("month.august", "八月"),
    ("month.september", "九月"),
    ("month.october", "十月"),
    ("month.november", "十一月"),
    ("month.december", "十二月"),
    // Days of week
    ("day_of_week.mon", "星期一"),
    ("day_of_week.tue", "星期二"),
    ("day_of_week.wed", "星期三"),
    ("day_of_week.thu", "星期四"),
    ("day_of_week.fri", "星期五"),
    ("day_of_week.sat", "星期六"),
    ("day_of_week.sun", "星期日"),
];
