use avia_scanner::core::comparator::stable_sort;
use avia_scanner::sort_by;
use avia_scanner::{AirlineTicket, Date, Time, TicketField, TicketSorter};

fn ticket(
    from: &str,
    to: &str,
    airline: &str,
    departure: (Date, Time),
    arrival: (Date, Time),
    price: i32,
) -> AirlineTicket {
    AirlineTicket {
        from: from.to_string(),
        to: to.to_string(),
        airline: airline.to_string(),
        departure_date: departure.0,
        departure_time: departure.1,
        arrival_date: arrival.0,
        arrival_time: arrival.1,
        price,
    }
}

fn at(year: i32, month: i32, day: i32, hours: i32, minutes: i32) -> (Date, Time) {
    (Date::new(year, month, day), Time::new(hours, minutes))
}

fn fixture() -> Vec<AirlineTicket> {
    vec![
        ticket("VKO", "CDG", "Utair", at(2018, 2, 28, 17, 40), at(2018, 2, 28, 20, 0), 1200),
        ticket("AER", "DME", "Utair", at(2018, 3, 5, 14, 15), at(2018, 3, 5, 16, 30), 1700),
        ticket("AER", "SVO", "Aeroflot", at(2018, 3, 5, 18, 30), at(2018, 3, 5, 20, 30), 2300),
        ticket("PMI", "DME", "Iberia", at(2018, 2, 8, 23, 0), at(2018, 2, 9, 3, 30), 9000),
        ticket("CDG", "SVO", "AirFrance", at(2018, 3, 1, 13, 0), at(2018, 3, 1, 17, 30), 8000),
    ]
}

/// Positions of `tickets` in the original fixture, matched by price (unique there).
fn positions(tickets: &[AirlineTicket]) -> Vec<usize> {
    let original = fixture();
    tickets
        .iter()
        .map(|t| {
            original
                .iter()
                .position(|o| o.price == t.price)
                .expect("ticket from fixture")
        })
        .collect()
}

#[test]
fn test_sort_by_to_groups_destinations_in_input_order() {
    let mut tixs = fixture();
    stable_sort(&mut tixs, sort_by!(to));

    let to: Vec<&str> = tixs.iter().map(|t| t.to.as_str()).collect();
    assert_eq!(to, vec!["CDG", "DME", "DME", "SVO", "SVO"]);
    assert_eq!(positions(&tixs), vec![0, 1, 3, 2, 4]);
}

#[test]
fn test_sort_by_departure_date_keeps_equal_dates_in_order() {
    let mut tixs = fixture();
    stable_sort(&mut tixs, sort_by!(departure_date));

    assert_eq!(tixs.first().unwrap().departure_date, Date::new(2018, 2, 8));
    assert_eq!(tixs.last().unwrap().departure_date, Date::new(2018, 3, 5));
    assert_eq!(positions(&tixs), vec![3, 0, 4, 1, 2]);
}

#[test]
fn test_chained_sort_by_every_field() {
    let mut tixs = fixture();

    stable_sort(&mut tixs, sort_by!(to));
    assert_eq!(tixs.first().unwrap().to, "CDG");
    assert_eq!(tixs.last().unwrap().to, "SVO");
    assert_eq!(positions(&tixs), vec![0, 1, 3, 2, 4]);

    stable_sort(&mut tixs, sort_by!(from));
    assert_eq!(tixs.first().unwrap().from, "AER");
    assert_eq!(tixs.last().unwrap().from, "VKO");
    assert_eq!(positions(&tixs), vec![1, 2, 4, 3, 0]);

    stable_sort(&mut tixs, sort_by!(airline));
    assert_eq!(tixs.first().unwrap().airline, "Aeroflot");
    assert_eq!(tixs.last().unwrap().airline, "Utair");
    assert_eq!(positions(&tixs), vec![2, 4, 3, 1, 0]);

    stable_sort(&mut tixs, sort_by!(departure_date));
    assert_eq!(tixs.first().unwrap().departure_date, Date::new(2018, 2, 8));
    assert_eq!(tixs.last().unwrap().departure_date, Date::new(2018, 3, 5));
    assert_eq!(positions(&tixs), vec![3, 0, 4, 2, 1]);

    stable_sort(&mut tixs, sort_by!(departure_time));
    assert_eq!(tixs.first().unwrap().departure_time, Time::new(13, 0));
    assert_eq!(tixs.last().unwrap().departure_time, Time::new(23, 0));
    assert_eq!(positions(&tixs), vec![4, 1, 0, 2, 3]);

    stable_sort(&mut tixs, sort_by!(arrival_date));
    assert_eq!(tixs.first().unwrap().arrival_date, Date::new(2018, 2, 9));
    assert_eq!(tixs.last().unwrap().arrival_date, Date::new(2018, 3, 5));
    assert_eq!(positions(&tixs), vec![3, 0, 4, 1, 2]);

    stable_sort(&mut tixs, sort_by!(arrival_time));
    assert_eq!(tixs.first().unwrap().arrival_time, Time::new(3, 30));
    assert_eq!(tixs.last().unwrap().arrival_time, Time::new(20, 30));
    assert_eq!(positions(&tixs), vec![3, 1, 4, 0, 2]);

    stable_sort(&mut tixs, sort_by!(price));
    assert_eq!(tixs.first().unwrap().price, 1200);
    assert_eq!(tixs.last().unwrap().price, 9000);
    assert_eq!(positions(&tixs), vec![0, 1, 2, 4, 3]);
}

#[test]
fn test_sorter_matches_hand_chained_sorts() {
    let mut by_hand = fixture();
    for field in TicketField::ALL {
        stable_sort(&mut by_hand, field.comparator());
    }

    let mut by_sorter = fixture();
    TicketSorter::new(TicketField::ALL.to_vec()).sort(&mut by_sorter);

    assert_eq!(by_sorter, by_hand);
}

#[test]
fn test_sorter_breaks_date_ties_by_time() {
    let mut tixs = fixture();
    tixs.reverse();

    TicketSorter::new(vec![TicketField::DepartureTime, TicketField::DepartureDate]).sort(&mut tixs);

    assert_eq!(positions(&tixs), vec![3, 0, 4, 1, 2]);
}

#[test]
fn test_rendering_of_fixture_values() {
    let tixs = fixture();
    assert_eq!(tixs[3].departure_date.to_string(), "2018-02-08");
    assert_eq!(tixs[3].arrival_time.to_string(), "03:30");
    assert_eq!(tixs[0].arrival_time.render(), "20:00");
}
