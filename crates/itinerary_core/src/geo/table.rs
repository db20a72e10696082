//! Static country → continent/region table.

pub(crate) const AFRICA: &str = "Africa";
pub(crate) const ANTARCTICA: &str = "Antarctica";
pub(crate) const ASIA: &str = "Asia";
pub(crate) const EUROPE: &str = "Europe";
pub(crate) const NORTH_AMERICA: &str = "North America";
pub(crate) const OCEANIA: &str = "Oceania";
pub(crate) const SOUTH_AMERICA: &str = "South America";

/// One row: canonical country name, continent, region.
pub(crate) type CountryRow = (&'static str, &'static str, &'static str);

pub(crate) const COUNTRIES: &[CountryRow] = &[
    // East Asia
    ("China", ASIA, "East Asia"),
    ("Hong Kong", ASIA, "East Asia"),
    ("Japan", ASIA, "East Asia"),
    ("Macau", ASIA, "East Asia"),
    ("Mongolia", ASIA, "East Asia"),
    ("North Korea", ASIA, "East Asia"),
    ("South Korea", ASIA, "East Asia"),
    ("Taiwan", ASIA, "East Asia"),
    // Southeast Asia
    ("Brunei", ASIA, "Southeast Asia"),
    ("Cambodia", ASIA, "Southeast Asia"),
    ("Indonesia", ASIA, "Southeast Asia"),
    ("Laos", ASIA, "Southeast Asia"),
    ("Malaysia", ASIA, "Southeast Asia"),
    ("Myanmar", ASIA, "Southeast Asia"),
    ("Philippines", ASIA, "Southeast Asia"),
    ("Singapore", ASIA, "Southeast Asia"),
    ("Thailand", ASIA, "Southeast Asia"),
    ("Timor-Leste", ASIA, "Southeast Asia"),
    ("Vietnam", ASIA, "Southeast Asia"),
    // South Asia
    ("Afghanistan", ASIA, "South Asia"),
    ("Bangladesh", ASIA, "South Asia"),
    ("Bhutan", ASIA, "South Asia"),
    ("India", ASIA, "South Asia"),
    ("Iran", ASIA, "South Asia"),
    ("Maldives", ASIA, "South Asia"),
    ("Nepal", ASIA, "South Asia"),
    ("Pakistan", ASIA, "South Asia"),
    ("Sri Lanka", ASIA, "South Asia"),
    // Central Asia
    ("Kazakhstan", ASIA, "Central Asia"),
    ("Kyrgyzstan", ASIA, "Central Asia"),
    ("Tajikistan", ASIA, "Central Asia"),
    ("Turkmenistan", ASIA, "Central Asia"),
    ("Uzbekistan", ASIA, "Central Asia"),
    // Middle East
    ("Armenia", ASIA, "Middle East"),
    ("Azerbaijan", ASIA, "Middle East"),
    ("Bahrain", ASIA, "Middle East"),
    ("Georgia", ASIA, "Middle East"),
    ("Iraq", ASIA, "Middle East"),
    ("Israel", ASIA, "Middle East"),
    ("Jordan", ASIA, "Middle East"),
    ("Kuwait", ASIA, "Middle East"),
    ("Lebanon", ASIA, "Middle East"),
    ("Oman", ASIA, "Middle East"),
    ("Palestine", ASIA, "Middle East"),
    ("Qatar", ASIA, "Middle East"),
    ("Saudi Arabia", ASIA, "Middle East"),
    ("Syria", ASIA, "Middle East"),
    ("Turkey", ASIA, "Middle East"),
    ("United Arab Emirates", ASIA, "Middle East"),
    ("Yemen", ASIA, "Middle East"),
    // Northern Europe
    ("Åland Islands", EUROPE, "Northern Europe"),
    ("Denmark", EUROPE, "Northern Europe"),
    ("Estonia", EUROPE, "Northern Europe"),
    ("Faroe Islands", EUROPE, "Northern Europe"),
    ("Finland", EUROPE, "Northern Europe"),
    ("Guernsey", EUROPE, "Northern Europe"),
    ("Iceland", EUROPE, "Northern Europe"),
    ("Ireland", EUROPE, "Northern Europe"),
    ("Isle of Man", EUROPE, "Northern Europe"),
    ("Jersey", EUROPE, "Northern Europe"),
    ("Latvia", EUROPE, "Northern Europe"),
    ("Lithuania", EUROPE, "Northern Europe"),
    ("Norway", EUROPE, "Northern Europe"),
    ("Svalbard and Jan Mayen", EUROPE, "Northern Europe"),
    ("Sweden", EUROPE, "Northern Europe"),
    ("United Kingdom", EUROPE, "Northern Europe"),
    // Western Europe
    ("Austria", EUROPE, "Western Europe"),
    ("Belgium", EUROPE, "Western Europe"),
    ("France", EUROPE, "Western Europe"),
    ("Germany", EUROPE, "Western Europe"),
    ("Liechtenstein", EUROPE, "Western Europe"),
    ("Luxembourg", EUROPE, "Western Europe"),
    ("Monaco", EUROPE, "Western Europe"),
    ("Netherlands", EUROPE, "Western Europe"),
    ("Switzerland", EUROPE, "Western Europe"),
    // Southern Europe
    ("Albania", EUROPE, "Southern Europe"),
    ("Andorra", EUROPE, "Southern Europe"),
    ("Bosnia and Herzegovina", EUROPE, "Southern Europe"),
    ("Croatia", EUROPE, "Southern Europe"),
    ("Cyprus", EUROPE, "Southern Europe"),
    ("Gibraltar", EUROPE, "Southern Europe"),
    ("Greece", EUROPE, "Southern Europe"),
    ("Italy", EUROPE, "Southern Europe"),
    ("Kosovo", EUROPE, "Southern Europe"),
    ("Malta", EUROPE, "Southern Europe"),
    ("Montenegro", EUROPE, "Southern Europe"),
    ("North Macedonia", EUROPE, "Southern Europe"),
    ("Portugal", EUROPE, "Southern Europe"),
    ("San Marino", EUROPE, "Southern Europe"),
    ("Serbia", EUROPE, "Southern Europe"),
    ("Slovenia", EUROPE, "Southern Europe"),
    ("Spain", EUROPE, "Southern Europe"),
    ("Vatican City", EUROPE, "Southern Europe"),
    // Eastern Europe
    ("Belarus", EUROPE, "Eastern Europe"),
    ("Bulgaria", EUROPE, "Eastern Europe"),
    ("Czech Republic", EUROPE, "Eastern Europe"),
    ("Hungary", EUROPE, "Eastern Europe"),
    ("Moldova", EUROPE, "Eastern Europe"),
    ("Poland", EUROPE, "Eastern Europe"),
    ("Romania", EUROPE, "Eastern Europe"),
    ("Russia", EUROPE, "Eastern Europe"),
    ("Slovakia", EUROPE, "Eastern Europe"),
    ("Ukraine", EUROPE, "Eastern Europe"),
    // North Africa
    ("Algeria", AFRICA, "North Africa"),
    ("Egypt", AFRICA, "North Africa"),
    ("Libya", AFRICA, "North Africa"),
    ("Morocco", AFRICA, "North Africa"),
    ("Sudan", AFRICA, "North Africa"),
    ("Tunisia", AFRICA, "North Africa"),
    ("Western Sahara", AFRICA, "North Africa"),
    // West Africa
    ("Benin", AFRICA, "West Africa"),
    ("Burkina Faso", AFRICA, "West Africa"),
    ("Cape Verde", AFRICA, "West Africa"),
    ("Gambia", AFRICA, "West Africa"),
    ("Ghana", AFRICA, "West Africa"),
    ("Guinea", AFRICA, "West Africa"),
    ("Guinea-Bissau", AFRICA, "West Africa"),
    ("Ivory Coast", AFRICA, "West Africa"),
    ("Liberia", AFRICA, "West Africa"),
    ("Mali", AFRICA, "West Africa"),
    ("Mauritania", AFRICA, "West Africa"),
    ("Niger", AFRICA, "West Africa"),
    ("Nigeria", AFRICA, "West Africa"),
    ("Saint Helena", AFRICA, "West Africa"),
    ("Senegal", AFRICA, "West Africa"),
    ("Sierra Leone", AFRICA, "West Africa"),
    ("Togo", AFRICA, "West Africa"),
    // East Africa
    ("British Indian Ocean Territory", AFRICA, "East Africa"),
    ("Burundi", AFRICA, "East Africa"),
    ("Comoros", AFRICA, "East Africa"),
    ("Djibouti", AFRICA, "East Africa"),
    ("Eritrea", AFRICA, "East Africa"),
    ("Ethiopia", AFRICA, "East Africa"),
    ("Kenya", AFRICA, "East Africa"),
    ("Madagascar", AFRICA, "East Africa"),
    ("Malawi", AFRICA, "East Africa"),
    ("Mauritius", AFRICA, "East Africa"),
    ("Mayotte", AFRICA, "East Africa"),
    ("Mozambique", AFRICA, "East Africa"),
    ("Réunion", AFRICA, "East Africa"),
    ("Rwanda", AFRICA, "East Africa"),
    ("Seychelles", AFRICA, "East Africa"),
    ("Somalia", AFRICA, "East Africa"),
    ("South Sudan", AFRICA, "East Africa"),
    ("Tanzania", AFRICA, "East Africa"),
    ("Uganda", AFRICA, "East Africa"),
    ("Zambia", AFRICA, "East Africa"),
    ("Zimbabwe", AFRICA, "East Africa"),
    // Central Africa
    ("Angola", AFRICA, "Central Africa"),
    ("Cameroon", AFRICA, "Central Africa"),
    ("Central African Republic", AFRICA, "Central Africa"),
    ("Chad", AFRICA, "Central Africa"),
    ("Democratic Republic of the Congo", AFRICA, "Central Africa"),
    ("Equatorial Guinea", AFRICA, "Central Africa"),
    ("Gabon", AFRICA, "Central Africa"),
    ("Republic of the Congo", AFRICA, "Central Africa"),
    ("São Tomé and Príncipe", AFRICA, "Central Africa"),
    // Southern Africa
    ("Botswana", AFRICA, "Southern Africa"),
    ("Eswatini", AFRICA, "Southern Africa"),
    ("Lesotho", AFRICA, "Southern Africa"),
    ("Namibia", AFRICA, "Southern Africa"),
    ("South Africa", AFRICA, "Southern Africa"),
    // Northern America
    ("Bermuda", NORTH_AMERICA, "Northern America"),
    ("Canada", NORTH_AMERICA, "Northern America"),
    ("Greenland", NORTH_AMERICA, "Northern America"),
    ("Saint Pierre and Miquelon", NORTH_AMERICA, "Northern America"),
    ("United States", NORTH_AMERICA, "Northern America"),
    // Central America
    ("Belize", NORTH_AMERICA, "Central America"),
    ("Costa Rica", NORTH_AMERICA, "Central America"),
    ("El Salvador", NORTH_AMERICA, "Central America"),
    ("Guatemala", NORTH_AMERICA, "Central America"),
    ("Honduras", NORTH_AMERICA, "Central America"),
    ("Mexico", NORTH_AMERICA, "Central America"),
    ("Nicaragua", NORTH_AMERICA, "Central America"),
    ("Panama", NORTH_AMERICA, "Central America"),
    // Caribbean
    ("Anguilla", NORTH_AMERICA, "Caribbean"),
    ("Antigua and Barbuda", NORTH_AMERICA, "Caribbean"),
    ("Aruba", NORTH_AMERICA, "Caribbean"),
    ("Bahamas", NORTH_AMERICA, "Caribbean"),
    ("Barbados", NORTH_AMERICA, "Caribbean"),
    ("Bonaire", NORTH_AMERICA, "Caribbean"),
    ("British Virgin Islands", NORTH_AMERICA, "Caribbean"),
    ("Cayman Islands", NORTH_AMERICA, "Caribbean"),
    ("Cuba", NORTH_AMERICA, "Caribbean"),
    ("Curaçao", NORTH_AMERICA, "Caribbean"),
    ("Dominica", NORTH_AMERICA, "Caribbean"),
    ("Dominican Republic", NORTH_AMERICA, "Caribbean"),
    ("Grenada", NORTH_AMERICA, "Caribbean"),
    ("Guadeloupe", NORTH_AMERICA, "Caribbean"),
    ("Haiti", NORTH_AMERICA, "Caribbean"),
    ("Jamaica", NORTH_AMERICA, "Caribbean"),
    ("Martinique", NORTH_AMERICA, "Caribbean"),
    ("Montserrat", NORTH_AMERICA, "Caribbean"),
    ("Puerto Rico", NORTH_AMERICA, "Caribbean"),
    ("Saint Barthélemy", NORTH_AMERICA, "Caribbean"),
    ("Saint Kitts and Nevis", NORTH_AMERICA, "Caribbean"),
    ("Saint Lucia", NORTH_AMERICA, "Caribbean"),
    ("Saint Martin", NORTH_AMERICA, "Caribbean"),
    ("Saint Vincent and the Grenadines", NORTH_AMERICA, "Caribbean"),
    ("Sint Maarten", NORTH_AMERICA, "Caribbean"),
    ("Trinidad and Tobago", NORTH_AMERICA, "Caribbean"),
    ("Turks and Caicos Islands", NORTH_AMERICA, "Caribbean"),
    ("U.S. Virgin Islands", NORTH_AMERICA, "Caribbean"),
    // South America
    ("Argentina", SOUTH_AMERICA, "South America"),
    ("Bolivia", SOUTH_AMERICA, "South America"),
    ("Brazil", SOUTH_AMERICA, "South America"),
    ("Chile", SOUTH_AMERICA, "South America"),
    ("Colombia", SOUTH_AMERICA, "South America"),
    ("Ecuador", SOUTH_AMERICA, "South America"),
    ("Falkland Islands", SOUTH_AMERICA, "South America"),
    ("French Guiana", SOUTH_AMERICA, "South America"),
    ("Guyana", SOUTH_AMERICA, "South America"),
    ("Paraguay", SOUTH_AMERICA, "South America"),
    ("Peru", SOUTH_AMERICA, "South America"),
    ("South Georgia and the South Sandwich Islands", SOUTH_AMERICA, "South America"),
    ("Suriname", SOUTH_AMERICA, "South America"),
    ("Uruguay", SOUTH_AMERICA, "South America"),
    ("Venezuela", SOUTH_AMERICA, "South America"),
    // Australia and New Zealand
    ("Australia", OCEANIA, "Australia and New Zealand"),
    ("Christmas Island", OCEANIA, "Australia and New Zealand"),
    ("Cocos (Keeling) Islands", OCEANIA, "Australia and New Zealand"),
    ("New Zealand", OCEANIA, "Australia and New Zealand"),
    ("Norfolk Island", OCEANIA, "Australia and New Zealand"),
    // Melanesia
    ("Fiji", OCEANIA, "Melanesia"),
    ("New Caledonia", OCEANIA, "Melanesia"),
    ("Papua New Guinea", OCEANIA, "Melanesia"),
    ("Solomon Islands", OCEANIA, "Melanesia"),
    ("Vanuatu", OCEANIA, "Melanesia"),
    // Micronesia
    ("Guam", OCEANIA, "Micronesia"),
    ("Kiribati", OCEANIA, "Micronesia"),
    ("Marshall Islands", OCEANIA, "Micronesia"),
    ("Micronesia", OCEANIA, "Micronesia"),
    ("Nauru", OCEANIA, "Micronesia"),
    ("Northern Mariana Islands", OCEANIA, "Micronesia"),
    ("Palau", OCEANIA, "Micronesia"),
    // Polynesia
    ("American Samoa", OCEANIA, "Polynesia"),
    ("Cook Islands", OCEANIA, "Polynesia"),
    ("French Polynesia", OCEANIA, "Polynesia"),
    ("Niue", OCEANIA, "Polynesia"),
    ("Pitcairn Islands", OCEANIA, "Polynesia"),
    ("Samoa", OCEANIA, "Polynesia"),
    ("Tokelau", OCEANIA, "Polynesia"),
    ("Tonga", OCEANIA, "Polynesia"),
    ("Tuvalu", OCEANIA, "Polynesia"),
    ("Wallis and Futuna", OCEANIA, "Polynesia"),
    // Antarctica
    ("Antarctica", ANTARCTICA, "Antarctica"),
    ("Bouvet Island", ANTARCTICA, "Antarctica"),
    ("French Southern Territories", ANTARCTICA, "Antarctica"),
    ("Heard Island and McDonald Islands", ANTARCTICA, "Antarctica"),
];

/// Exact alternate spellings. Matching stays exact; nothing here is fuzzy.
pub(crate) const ALIASES: &[(&str, &str)] = &[
    ("USA", "United States"),
    ("US", "United States"),
    ("United States of America", "United States"),
    ("UK", "United Kingdom"),
    ("Great Britain", "United Kingdom"),
    ("England", "United Kingdom"),
    ("Scotland", "United Kingdom"),
    ("Wales", "United Kingdom"),
    ("Northern Ireland", "United Kingdom"),
    ("Czechia", "Czech Republic"),
    ("Côte d'Ivoire", "Ivory Coast"),
    ("Cote d'Ivoire", "Ivory Coast"),
    ("The Netherlands", "Netherlands"),
    ("Burma", "Myanmar"),
    ("Swaziland", "Eswatini"),
    ("Macedonia", "North Macedonia"),
    ("Cabo Verde", "Cape Verde"),
    ("Viet Nam", "Vietnam"),
    ("Korea", "South Korea"),
    ("Republic of Korea", "South Korea"),
    ("Türkiye", "Turkey"),
    ("UAE", "United Arab Emirates"),
    ("Vatican", "Vatican City"),
    ("Holy See", "Vatican City"),
    ("East Timor", "Timor-Leste"),
    ("DRC", "Democratic Republic of the Congo"),
    ("DR Congo", "Democratic Republic of the Congo"),
    ("Congo", "Republic of the Congo"),
    ("Russian Federation", "Russia"),
    ("Lao PDR", "Laos"),
    ("Brunei Darussalam", "Brunei"),
    ("Curacao", "Curaçao"),
    ("Reunion", "Réunion"),
    ("Sao Tome and Principe", "São Tomé and Príncipe"),
    ("Federated States of Micronesia", "Micronesia"),
    ("Palestinian Territories", "Palestine"),
    ("The Bahamas", "Bahamas"),
    ("The Gambia", "Gambia"),
];
