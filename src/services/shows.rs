use std::collections::BTreeMap;

use crate::config::HallConfig;
use crate::error::ServiceError;
use crate::models::{NewShow, Show, Ticket};
use crate::repository::{ShowRepository, TicketRepository};

/// Сервис сеансов: CRUD плюс расчет свободных мест.
#[derive(Clone)]
pub struct ShowService {
    hall: HallConfig,
    shows: ShowRepository,
    tickets: TicketRepository,
}

impl ShowService {
    pub fn new(hall: HallConfig, shows: ShowRepository, tickets: TicketRepository) -> Self {
        ShowService {
            hall,
            shows,
            tickets,
        }
    }

    pub async fn find_all(&self) -> Result<Vec<Show>, ServiceError> {
        Ok(self.shows.find_all().await?)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Show, ServiceError> {
        self.shows
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Сеанс с id = {id} не найден")))
    }

    /* ---------- административный путь ---------- */

    pub async fn save(&self, show: &NewShow) -> Result<Show, ServiceError> {
        Ok(self.shows.save(show).await?)
    }

    pub async fn update(&self, show: &Show) -> Result<(), ServiceError> {
        if !self.shows.update(show).await? {
            return Err(ServiceError::NotFound(format!(
                "Сеанс с id = {} не найден",
                show.id
            )));
        }
        Ok(())
    }

    pub async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError> {
        if !self.shows.delete_by_id(id).await? {
            return Err(ServiceError::NotFound(format!("Сеанс с id = {id} не найден")));
        }
        Ok(())
    }

    /* ---------- свободные места ---------- */

    /// Ряды, в которых еще остались свободные места, по возрастанию.
    pub async fn free_rows(&self, show_id: i32) -> Result<Vec<i32>, ServiceError> {
        let sold = self.tickets.find_all_by_show_id(show_id).await?;
        Ok(free_rows(&self.hall, &sold))
    }

    /// Свободные места в ряде, по возрастанию. Для ряда вне зала - пусто.
    pub async fn free_cells(&self, show_id: i32, pos_row: i32) -> Result<Vec<i32>, ServiceError> {
        let sold = self.tickets.find_all_by_show_id(show_id).await?;
        Ok(free_cells(&self.hall, &sold, pos_row))
    }
}

/// Карта свободных мест: каждый ряд 1..=rows получает полный список мест
/// 1..=cells, из которого вычеркнуто каждое проданное (pos_row, cell).
/// Билеты с рядом вне зала игнорируются.
fn free_seat_map(hall: &HallConfig, sold: &[Ticket]) -> BTreeMap<i32, Vec<i32>> {
    let mut free: BTreeMap<i32, Vec<i32>> = BTreeMap::new();
    for row in 1..=hall.rows {
        free.insert(row, (1..=hall.cells).collect());
    }
    for ticket in sold {
        if let Some(cells) = free.get_mut(&ticket.pos_row) {
            cells.retain(|&cell| cell != ticket.cell);
        }
    }
    free
}

fn free_rows(hall: &HallConfig, sold: &[Ticket]) -> Vec<i32> {
    free_seat_map(hall, sold)
        .into_iter()
        .filter(|(_, cells)| !cells.is_empty())
        .map(|(row, _)| row)
        .collect()
}

fn free_cells(hall: &HallConfig, sold: &[Ticket], pos_row: i32) -> Vec<i32> {
    free_seat_map(hall, sold)
        .remove(&pos_row)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn hall() -> HallConfig {
        HallConfig { rows: 7, cells: 10 }
    }

    fn sold(pos_row: i32, cell: i32) -> Ticket {
        Ticket {
            id: 0,
            show_id: 1,
            pos_row,
            cell,
            user_id: 1,
            sold_at: NaiveDateTime::default(),
        }
    }

    #[test]
    fn empty_hall_has_every_row_and_cell_free() {
        let hall = hall();
        assert_eq!(free_rows(&hall, &[]), vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(
            free_cells(&hall, &[], 1),
            vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]
        );
    }

    #[test]
    fn sold_seat_disappears_from_its_row_only() {
        let hall = hall();
        let tickets = vec![sold(3, 5)];
        assert_eq!(
            free_cells(&hall, &tickets, 3),
            vec![1, 2, 3, 4, 6, 7, 8, 9, 10]
        );
        // ряд 3 еще в списке - осталось девять мест
        assert_eq!(free_rows(&hall, &tickets), vec![1, 2, 3, 4, 5, 6, 7]);
        // соседний ряд не тронут
        assert_eq!(
            free_cells(&hall, &tickets, 4),
            vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]
        );
    }

    #[test]
    fn fully_sold_row_drops_out_of_free_rows() {
        let hall = hall();
        let tickets: Vec<Ticket> = (1..=10).map(|cell| sold(2, cell)).collect();
        assert_eq!(free_rows(&hall, &tickets), vec![1, 3, 4, 5, 6, 7]);
        assert_eq!(free_cells(&hall, &tickets, 2), Vec::<i32>::new());
    }

    #[test]
    fn row_outside_the_hall_yields_empty_list() {
        let hall = hall();
        assert_eq!(free_cells(&hall, &[], 0), Vec::<i32>::new());
        assert_eq!(free_cells(&hall, &[], 8), Vec::<i32>::new());
        assert_eq!(free_cells(&hall, &[], -1), Vec::<i32>::new());
    }

    #[test]
    fn ticket_on_unknown_row_is_ignored() {
        let hall = hall();
        let tickets = vec![sold(99, 1)];
        assert_eq!(free_rows(&hall, &tickets), vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn computation_is_idempotent() {
        let hall = hall();
        let tickets = vec![sold(1, 1), sold(4, 7)];
        assert_eq!(free_seat_map(&hall, &tickets), free_seat_map(&hall, &tickets));
    }

    proptest! {
        // Свободные ряды - ровно те, где продано меньше cells билетов;
        // свободные места в ряде - дополнение проданных, по возрастанию.
        #[test]
        fn free_seats_complement_sold_seats(
            seats in prop::collection::hash_set((1..=7i32, 1..=10i32), 0..50)
        ) {
            let hall = hall();
            let tickets: Vec<Ticket> =
                seats.iter().map(|&(row, cell)| sold(row, cell)).collect();
            let by_row = |row: i32| -> HashSet<i32> {
                seats.iter().filter(|&&(r, _)| r == row).map(|&(_, c)| c).collect()
            };

            let expected_rows: Vec<i32> =
                (1..=7).filter(|&row| by_row(row).len() < 10).collect();
            prop_assert_eq!(free_rows(&hall, &tickets), expected_rows);

            for row in 1..=7 {
                let taken = by_row(row);
                let expected: Vec<i32> =
                    (1..=10).filter(|cell| !taken.contains(cell)).collect();
                prop_assert_eq!(free_cells(&hall, &tickets, row), expected);
            }
        }
    }
}
