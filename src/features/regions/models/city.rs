/// Police station serving part of a city
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Station {
    pub id: &'static str,
    pub name: &'static str,
    pub area: &'static str,
}

/// City offered by the submission form, with its police stations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct City {
    pub id: &'static str,
    pub name: &'static str,
    pub name_in_bengali: &'static str,
    pub stations: &'static [Station],
}

impl City {
    pub fn station(&self, station_id: &str) -> Option<&'static Station> {
        self.stations.iter().find(|s| s.id == station_id)
    }
}

pub const CITIES: &[City] = &[
    City {
        id: "dhaka",
        name: "Dhaka",
        name_in_bengali: "ঢাকা",
        stations: &[
            Station {
                id: "motijheel",
                name: "Motijheel",
                area: "Motijheel, Paltan",
            },
            Station {
                id: "gulshan",
                name: "Gulshan",
                area: "Gulshan, Banani",
            },
            Station {
                id: "dhanmondi",
                name: "Dhanmondi",
                area: "Dhanmondi, Adabor",
            },
            Station {
                id: "mirpur",
                name: "Mirpur",
                area: "Mirpur, Siddeshwari",
            },
        ],
    },
    City {
        id: "chittagong",
        name: "Chittagong",
        name_in_bengali: "চট্টগ্রাম",
        stations: &[
            Station {
                id: "kotwali",
                name: "Kotwali",
                area: "Kotwali, Port Area",
            },
            Station {
                id: "halishahar",
                name: "Halishahar",
                area: "Halishahar, Nasirabad",
            },
            Station {
                id: "bayazid",
                name: "Bayazid",
                area: "Bayazid, Agrabad",
            },
        ],
    },
    City {
        id: "sylhet",
        name: "Sylhet",
        name_in_bengali: "সিলেট",
        stations: &[
            Station {
                id: "kotwali_sylhet",
                name: "Kotwali",
                area: "Main City",
            },
            Station {
                id: "osmani_nagar",
                name: "Osmani Nagar",
                area: "Osmani Nagar",
            },
        ],
    },
];
