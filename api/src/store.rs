//! In-memory record stores
//!
//! Append-and-filter stores for the simple business records. Each list sits
//! behind its own lock; no record here has a lifecycle beyond "append,
//! filter by tenant".

use crate::models::{AttendanceEvent, Booking, Lead, OvertimeEntry, StaffMember};
use alice_tenant::TenantId;
use parking_lot::RwLock;
use uuid::Uuid;

/// All per-request record stores.
pub struct Records {
    pub bookings: RwLock<Vec<Booking>>,
    pub leads: RwLock<Vec<Lead>>,
    pub staff: RwLock<Vec<StaffMember>>,
    pub attendance: RwLock<Vec<AttendanceEvent>>,
    pub overtime: RwLock<Vec<OvertimeEntry>>,
}

impl Records {
    /// Empty stores.
    pub fn new() -> Self {
        Self {
            bookings: RwLock::new(Vec::new()),
            leads: RwLock::new(Vec::new()),
            staff: RwLock::new(Vec::new()),
            attendance: RwLock::new(Vec::new()),
            overtime: RwLock::new(Vec::new()),
        }
    }

    /// Bookings for a tenant.
    pub fn bookings_for(&self, business_id: &TenantId) -> Vec<Booking> {
        self.bookings
            .read()
            .iter()
            .filter(|b| b.business_id == *business_id)
            .cloned()
            .collect()
    }

    /// A staff member's non-cancelled bookings.
    pub fn agenda_for(&self, business_id: &TenantId, staff_id: &Uuid) -> Vec<Booking> {
        self.bookings
            .read()
            .iter()
            .filter(|b| {
                b.business_id == *business_id
                    && b.staff_id == Some(*staff_id)
                    && b.status != "cancelled"
            })
            .cloned()
            .collect()
    }

    /// Credential match for staff login.
    pub fn find_staff(
        &self,
        business_id: &TenantId,
        name: &str,
        national_id: &str,
        pin: &str,
    ) -> Option<StaffMember> {
        self.staff
            .read()
            .iter()
            .find(|s| {
                s.business_id == *business_id
                    && s.name == name
                    && s.national_id == national_id
                    && s.pin == pin
            })
            .cloned()
    }
}

impl Default for Records {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking(business: TenantId, staff: Option<Uuid>, status: &str) -> Booking {
        Booking {
            id: Uuid::new_v4(),
            business_id: business,
            client_name: "Client".into(),
            contact: "c@x.com".into(),
            service: "cut".into(),
            when: "2026-09-01T10:00".into(),
            staff_id: staff,
            notes: String::new(),
            status: status.into(),
        }
    }

    #[test]
    fn bookings_filter_by_tenant() {
        let records = Records::new();
        let a = TenantId::new_v4();
        let b = TenantId::new_v4();
        records.bookings.write().push(booking(a, None, "confirmed"));
        records.bookings.write().push(booking(b, None, "confirmed"));

        assert_eq!(records.bookings_for(&a).len(), 1);
        assert_eq!(records.bookings_for(&b).len(), 1);
    }

    #[test]
    fn agenda_excludes_cancelled_and_other_staff() {
        let records = Records::new();
        let business = TenantId::new_v4();
        let staff = Uuid::new_v4();
        records.bookings.write().push(booking(business, Some(staff), "confirmed"));
        records.bookings.write().push(booking(business, Some(staff), "cancelled"));
        records.bookings.write().push(booking(business, Some(Uuid::new_v4()), "confirmed"));

        assert_eq!(records.agenda_for(&business, &staff).len(), 1);
    }

    #[test]
    fn staff_lookup_requires_all_credentials() {
        let records = Records::new();
        let business = TenantId::new_v4();
        records.staff.write().push(StaffMember {
            id: Uuid::new_v4(),
            business_id: business,
            name: "Noma".into(),
            national_id: "9001011234567".into(),
            pin: "4321".into(),
            role: "staff".into(),
        });

        assert!(records.find_staff(&business, "Noma", "9001011234567", "4321").is_some());
        assert!(records.find_staff(&business, "Noma", "9001011234567", "0000").is_none());
        assert!(records.find_staff(&TenantId::new_v4(), "Noma", "9001011234567", "4321").is_none());
    }
}
