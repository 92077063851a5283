//! English catalog

pub const ENTRIES: &[(&str, &str)] = &[
    // Connectives
    ("every", "every"),
    ("and", "and"),
    ("at", "at"),
    ("on", "on"),
    ("in", "in"),
    ("list_separator", ", "),
    ("clause_separator", " "),
    // Units
    ("second", "second"),
    ("seconds", "seconds"),
    ("minute", "minute"),
    ("minutes", "minutes"),
    ("hour", "hour"),
    ("hours", "hours"),
    ("day", "day"),
    ("days", "days"),
    ("month", "month"),
    ("months", "months"),
    ("year", "year"),
    ("years", "years"),
    // Templates
    ("unit_value", "{unit} {0}"),
    ("from_x_to_y", "from {0} to {1}"),
    ("between_x_and_y", "between {0} and {1}"),
    ("every_x", "every {0}"),
    ("every_n_x", "every {0} {1}"),
    ("starting_with", "starting with {0}"),
    ("at_time", "at {0}"),
    ("every_n_hours_at_minute", "every {0} hours at minute {1}"),
    ("at_minute_of_every_hour", "at minute {0} of every hour"),
    ("nth_of_every_month", "on the {0} {1} of every month"),
    ("last_of_every_month", "on the last {0} of every month"),
    ("last_day_of_month", "on the last day of the month"),
    ("last_weekday_of_month", "on the last weekday of the month"),
    ("nearest_weekday_to", "on the nearest weekday to {0} of the month"),
    ("with_preposition", "{0} {1}"),
    ("list_last", "{0} {1} {2}"),
    // Ordinals
    ("ordinal.1", "first"),
    ("ordinal.2", "second"),
    ("ordinal.3", "third"),
    ("ordinal.4", "fourth"),
    ("ordinal.5", "fifth"),
    // Months
    ("month.january", "January"),
    ("month.february", "February"),
    ("month.march", "March"),
    ("month.april", "April"),
    ("month.may", "May"),
    ("month.june", "June"),
    ("month.july", "July"),
    ("month.august", "August"),
    ("month.september", "September"),
    ("month.october", "October"),
    ("month.november", "November"),
    ("month.december", "December"),
    // Days of week
    ("day_of_week.mon", "Monday"),
    ("day_of_week.tue", "Tuesday"),
    ("day_of_week.wed", "Wednesday"),
    ("day_of_week.thu", "Thursday"),
    ("day_of_week.fri", "Friday"),
    ("day_of_week.sat", "Saturday"),
    ("day_of_week.sun", "Sunday"),
];
